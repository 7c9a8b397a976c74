use mono_ui::components::primitives::{Switch, SwitchEvent};

// Uncontrolled: the switch owns its value.
let wifi = cx.new(|cx| Switch::uncontrolled("wifi", true, cx).label("Wi-Fi"));

// Controlled: the owner decides and feeds the value back.
let airplane = cx.new(|cx| Switch::controlled("airplane", false, cx).label("Airplane mode"));
cx.subscribe(&airplane, |_this, switch, SwitchEvent::Change(on), cx| {
    switch.update(cx, |switch, cx| switch.set_checked(*on, cx));
})
.detach();

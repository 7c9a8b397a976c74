use mono_ui::components::primitives::{TabBar, TabBarEvent};
use mono_ui::controls::selector::{Selector, SelectorOption};

let options = vec![
    SelectorOption::new("chat".into(), "Chat"),
    SelectorOption::new("search".into(), "Search"),
    SelectorOption::new("agents".into(), "Agents").disabled(true),
];
// Unknown keys are rejected here, before anything renders.
let selector = Selector::uncontrolled(options, "chat".into())?;
let tabs = cx.new(|cx| TabBar::new("tabs", selector, cx));

cx.subscribe(&tabs, |_this, _tabs, TabBarEvent::Select(key), _cx| {
    tracing::info!(tab = %key, "Tab selected");
})
.detach();

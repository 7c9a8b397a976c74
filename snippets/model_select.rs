use mono_ui::components::primitives::{ModelSelect, ModelSelectEvent};
use mono_ui::controls::selector::{Selector, SelectorOption};

let options = vec![
    SelectorOption::new("mono-large".into(), "Mono Large"),
    SelectorOption::new("mono-fast".into(), "Mono Fast"),
];
// Controlled: the owner keeps the selected model and feeds it back.
let selector = Selector::controlled(options, "mono-large".into())?;
let model = cx.new(|_| ModelSelect::new("model", selector));

cx.subscribe(&model, |_this, model, ModelSelectEvent::Select(key), cx| {
    model.update(cx, |model, cx| model.set_selected(key.clone(), cx));
})
.detach();

use mono_ui::components::primitives::{PromptEvent, PromptInput};

let prompt = cx.new(|cx| PromptInput::new(window, cx));

// Temperature and model are owned here and only displayed by the input.
prompt.update(cx, |prompt, cx| {
    prompt.set_temperature(0.4, cx);
    prompt.set_model(Some("Mono Large".into()), cx);
});

cx.subscribe(&prompt, |_this, _prompt, PromptEvent::Submit(text), _cx| {
    tracing::info!(len = text.len(), "Prompt submitted");
})
.detach();

use mono_ui::components::primitives::MessageBubble;

div()
    .flex()
    .flex_col()
    .gap_3()
    .child(MessageBubble::user("Can you summarize this thread?").meta("09:41"))
    .child(MessageBubble::assistant("Sure. Three decisions were made...").meta("09:41"))

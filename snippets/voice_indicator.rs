use mono_ui::components::primitives::VoiceIndicator;

// `listening` and `level` belong to the caller, e.g. an audio capture task.
VoiceIndicator::new("voice", self.listening).level(self.level)

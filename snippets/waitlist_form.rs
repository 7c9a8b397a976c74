use std::rc::Rc;

use futures::FutureExt;
use mono_ui::components::feedback::{SubmitFn, WaitlistEvent, WaitlistForm};

let submit: SubmitFn = Rc::new(|email: String| {
    async move {
        api::join_waitlist(&email).await?;
        Ok(())
    }
    .boxed_local()
});
let form = cx.new(|cx| WaitlistForm::new(submit, window, cx));

cx.subscribe(&form, |_this, _form, event: &WaitlistEvent, _cx| {
    tracing::info!(event = ?event, "Waitlist");
})
.detach();

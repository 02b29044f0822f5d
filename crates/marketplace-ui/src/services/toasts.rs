//! Notification helpers callable from any component or callback.

use crate::base::toast::ToastQueue;
use crate::models::NotifyErrorArgs;
use js_sys::Date;
use yewdux::prelude::Dispatch;

/// Show an error toast in the top-left stack. It dismisses itself after a few seconds.
pub fn notify_error(args: NotifyErrorArgs) {
    let now = Date::now();
    Dispatch::<ToastQueue>::new().reduce_mut(move |queue| {
        queue.push_error(args.caption, now);
    });
}

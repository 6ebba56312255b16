//! UI framework capability.
//!
//! Handlers never construct framework widgets directly. The browser crate
//! binds the page's framework bundle; tests use an in-memory stand-in.

use crate::error::UiError;

/// Undoes a widget attachment.
pub type Disposer = Box<dyn FnOnce()>;

pub trait Widgets {
    type Element;

    /// Attach a tooltip to `el`.
    fn tooltip(&self, el: &Self::Element) -> Result<Disposer, UiError>;

    fn close_alert(&self, el: &Self::Element) -> Result<(), UiError>;

    fn show_toast(&self, el: &Self::Element) -> Result<(), UiError>;
}

/// Attach a tooltip to every element. When one attachment fails, the ones
/// already made are disposed before the error is returned.
pub fn attach_tooltips<W, I>(widgets: &W, elements: I) -> Result<Vec<Disposer>, UiError>
where
    W: Widgets + ?Sized,
    I: IntoIterator<Item = W::Element>,
{
    let mut attached = Vec::new();
    for el in elements {
        match widgets.tooltip(&el) {
            Ok(dispose) => attached.push(dispose),
            Err(err) => {
                for dispose in attached {
                    dispose();
                }
                return Err(err);
            }
        }
    }
    Ok(attached)
}

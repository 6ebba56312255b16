//! Transient button states: copy feedback and submit loading.

use regex::Regex;
use std::sync::LazyLock;

pub const COPY_SUCCESS_CLASS: &str = "copy-success";
pub const LOADING_CLASS: &str = "loading";

static BUTTON_VARIANT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"btn-[A-Za-z0-9_]+").expect("valid button variant regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
}

impl CopyOutcome {
    /// Outcome of the selection-based fallback: only a thrown error counts as
    /// a failure, a `false` from the copy command does not.
    pub fn after_fallback<E>(result: &Result<bool, E>) -> Self {
        match result {
            Ok(_) => CopyOutcome::Copied,
            Err(_) => CopyOutcome::Failed,
        }
    }

    pub fn label_html(self) -> &'static str {
        match self {
            CopyOutcome::Copied => r#"<i class="fas fa-check me-1"></i>Copied!"#,
            CopyOutcome::Failed => r#"<i class="fas fa-times me-1"></i>Failed"#,
        }
    }

    fn variant(self) -> &'static str {
        match self {
            CopyOutcome::Copied => "btn-success",
            CopyOutcome::Failed => "btn-danger",
        }
    }

    fn marker_class(self) -> Option<&'static str> {
        match self {
            CopyOutcome::Copied => Some(COPY_SUCCESS_CLASS),
            CopyOutcome::Failed => None,
        }
    }

    fn is_feedback_label(html: &str) -> bool {
        html == CopyOutcome::Copied.label_html() || html == CopyOutcome::Failed.label_html()
    }

    /// Class attribute while the feedback shows. The marker is added the way
    /// `classList.add` does it: tokens deduplicated and single-space joined.
    fn feedback_class(self, original: &str) -> String {
        let rewritten = BUTTON_VARIANT.replace_all(original, self.variant());
        let Some(marker) = self.marker_class() else {
            return rewritten.into_owned();
        };
        let mut tokens: Vec<&str> = Vec::new();
        for token in rewritten.split_ascii_whitespace().chain([marker]) {
            if !tokens.contains(&token) {
                tokens.push(token);
            }
        }
        tokens.join(" ")
    }
}

/// The parts of a button copy feedback reads and rewrites.
pub trait FeedbackTarget {
    fn inner_html(&self) -> String;

    fn set_inner_html(&self, html: &str);

    fn class_attr(&self) -> Option<String>;

    /// `None` removes the attribute.
    fn set_class_attr(&self, class: Option<&str>);
}

/// A button's markup and `class` attribute captured before the feedback was
/// applied, so the revert is byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyFeedback {
    inner_html: String,
    class_attr: Option<String>,
}

impl CopyFeedback {
    /// Put `target` into its feedback state. Returns `None`, leaving the
    /// button alone, while an earlier copy's feedback is still showing.
    pub fn apply<T: FeedbackTarget + ?Sized>(target: &T, outcome: CopyOutcome) -> Option<Self> {
        let inner_html = target.inner_html();
        if CopyOutcome::is_feedback_label(&inner_html) {
            return None;
        }
        let class_attr = target.class_attr();

        target.set_inner_html(outcome.label_html());
        let class = outcome.feedback_class(class_attr.as_deref().unwrap_or_default());
        target.set_class_attr(Some(&class));

        Some(Self {
            inner_html,
            class_attr,
        })
    }

    pub fn revert<T: FeedbackTarget + ?Sized>(&self, target: &T) {
        target.set_inner_html(&self.inner_html);
        target.set_class_attr(self.class_attr.as_deref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Default)]
    struct Button {
        html: RefCell<String>,
        class: RefCell<Option<String>>,
    }

    impl Button {
        fn new(html: &str, class: Option<&str>) -> Self {
            Self {
                html: RefCell::new(html.to_owned()),
                class: RefCell::new(class.map(str::to_owned)),
            }
        }
    }

    impl FeedbackTarget for Button {
        fn inner_html(&self) -> String {
            self.html.borrow().clone()
        }

        fn set_inner_html(&self, html: &str) {
            *self.html.borrow_mut() = html.to_owned();
        }

        fn class_attr(&self) -> Option<String> {
            self.class.borrow().clone()
        }

        fn set_class_attr(&self, class: Option<&str>) {
            *self.class.borrow_mut() = class.map(str::to_owned);
        }
    }

    #[test]
    fn copied_then_reverted_exactly() {
        let original_class = "btn  btn-outline-primary\tbtn-sm";
        let button = Button::new(r#"<i class="fas fa-copy"></i> Copy"#, Some(original_class));

        let feedback = CopyFeedback::apply(&button, CopyOutcome::Copied).unwrap();
        assert_eq!(button.inner_html(), CopyOutcome::Copied.label_html());
        assert_eq!(
            button.class_attr().as_deref(),
            Some("btn btn-success-primary btn-success copy-success")
        );

        feedback.revert(&button);
        assert_eq!(button.inner_html(), r#"<i class="fas fa-copy"></i> Copy"#);
        assert_eq!(button.class_attr().as_deref(), Some(original_class));
    }

    #[test]
    fn failed_rewrites_variant_without_marker() {
        let button = Button::new("Copy", Some("btn  btn-primary"));
        let feedback = CopyFeedback::apply(&button, CopyOutcome::Failed).unwrap();
        assert_eq!(button.class_attr().as_deref(), Some("btn  btn-danger"));
        assert!(button.inner_html().ends_with("Failed"));

        feedback.revert(&button);
        assert_eq!(button.class_attr().as_deref(), Some("btn  btn-primary"));
        assert_eq!(button.inner_html(), "Copy");
    }

    #[test]
    fn button_without_class_attribute_loses_it_again() {
        let button = Button::new("Copy", None);
        let feedback = CopyFeedback::apply(&button, CopyOutcome::Copied).unwrap();
        assert_eq!(button.class_attr().as_deref(), Some(COPY_SUCCESS_CLASS));

        feedback.revert(&button);
        assert_eq!(button.class_attr(), None);
        assert_eq!(button.inner_html(), "Copy");
    }

    #[test]
    fn marker_is_not_duplicated() {
        let button = Button::new("Copy", Some("copy-success btn btn-light"));
        CopyFeedback::apply(&button, CopyOutcome::Copied).unwrap();
        assert_eq!(button.class_attr().as_deref(), Some("copy-success btn btn-success"));
    }

    #[test]
    fn second_copy_while_showing_keeps_first_snapshot() {
        let button = Button::new("Copy", Some("btn btn-primary"));
        let first = CopyFeedback::apply(&button, CopyOutcome::Copied).unwrap();

        assert_eq!(CopyFeedback::apply(&button, CopyOutcome::Failed), None);
        assert_eq!(button.inner_html(), CopyOutcome::Copied.label_html());

        first.revert(&button);
        assert_eq!(button.inner_html(), "Copy");
        assert_eq!(button.class_attr().as_deref(), Some("btn btn-primary"));
    }

    #[test]
    fn fallback_fails_only_on_error() {
        assert_eq!(CopyOutcome::after_fallback::<()>(&Ok(true)), CopyOutcome::Copied);
        assert_eq!(CopyOutcome::after_fallback::<()>(&Ok(false)), CopyOutcome::Copied);
        assert_eq!(CopyOutcome::after_fallback(&Err("denied")), CopyOutcome::Failed);
    }
}

//! Decorative behaviors layered over the static page.

pub mod focus;
pub mod hover;
pub mod lazy_images;
pub mod parallax;

/// Inline style writes on one element.
#[cfg_attr(test, mockall::automock)]
pub trait StyleTarget {
    fn set_style(&self, property: &str, value: &str);
    fn remove_style(&self, property: &str);
}

/// Class list writes on one element.
#[cfg_attr(test, mockall::automock)]
pub trait ClassTarget {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
}

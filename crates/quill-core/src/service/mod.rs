//! Services - the operations the HTTP layer exposes, built from the record
//! mutators and the ports.

mod authors;
mod blog_posts;
mod exports;
mod notifications;

#[cfg(test)]
pub(crate) mod test_support;

pub use authors::{AuthorService, mask_email};
pub use blog_posts::{BlogPostService, PostFilter};
pub use exports::PdfExportService;
pub use notifications::{NotificationConfig, NotificationService};

//! Kelp - presentation helpers for content-management rendering.
//!
//! Five independent helpers over framework-supplied views:
//! - [`field_check`]: field presence and non-emptiness checks
//! - [`link_helper`]: link fields to render-ready [`LinkProperties`]
//! - [`youtube_video_id`]: video id extraction from YouTube URLs
//! - [`machinify`]: machine-name slugs from free text
//! - [`ImageDataExtractor`]: image fields to render-ready [`ImageData`]
//!
//! The hosting framework stays on the other side of small capability traits
//! ([`FieldBearer`], [`Link`], [`ImageField`], [`FileEntity`]) and injected
//! services ([`UrlGenerator`], [`ImageInspector`]). Inputs are read-only;
//! every output is a freshly built value with no state retained between
//! calls.

pub mod field;
pub mod image;
pub mod link;
pub mod slug;
pub mod video;

pub use field::{FieldBearer, IntoFieldNames, field_check};
pub use image::{
    DEFAULT_FOCAL_POINT, FileEntity, ImageData, ImageDataExtractor, ImageField, ImageInfo,
    ImageInspector, ImageProbe, UrlGenerator,
};
pub use link::{DEFAULT_LINK_TITLE, Link, LinkOptions, LinkProperties, LinkTarget, link_helper};
pub use slug::{DEFAULT_SEPARATOR, machinify, machinify_with};
pub use video::youtube_video_id;

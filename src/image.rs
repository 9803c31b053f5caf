//! Image field data extraction for background-image rendering.
//!
//! [`ImageDataExtractor`] flattens an image field into [`ImageData`]: the
//! absolute URL, alt text, probe-sourced dimensions, and a ready-to-embed
//! CSS background declaration. The URL-generation and image-inspection
//! services are injected at construction.

use anyhow::Result;
use log::debug;
use serde::Serialize;

/// Fixed background-position; no per-image focal point is read.
pub const DEFAULT_FOCAL_POINT: &str = "50% 50%";

/// Read-only view of a file entity referenced by an image field.
pub trait FileEntity {
    /// File identifier.
    fn id(&self) -> String;

    /// Storage URI, when the file has one.
    fn uri(&self) -> Option<String>;

    /// MIME type recorded for the file.
    fn mime_type(&self) -> String;
}

/// Read-only view of an image field and its first item.
pub trait ImageField {
    type File: FileEntity;

    /// The referenced file entity; `None` when the reference does not
    /// resolve to a concrete file.
    fn file(&self) -> Option<&Self::File>;

    /// Alt text of the first field item, if any.
    fn alt(&self) -> Option<String>;
}

/// Generates absolute URLs from storage URIs.
pub trait UrlGenerator {
    fn absolute_url(&self, uri: &str) -> Result<String>;
}

/// Probes stored images for byte size and pixel dimensions.
pub trait ImageInspector {
    fn probe(&self, uri: &str) -> Result<ImageProbe>;
}

/// Raw probe result from an [`ImageInspector`].
#[derive(Debug, Clone, Copy)]
pub struct ImageProbe {
    pub size: u64,
    pub width: u32,
    pub height: u32,
}

/// Inspection summary carried inside [`ImageData`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageInfo {
    /// File size in bytes.
    pub size: u64,
    /// MIME type recorded for the file.
    pub mime_type: String,
    /// Pixel width.
    pub width: u32,
    /// Pixel height.
    pub height: u32,
}

/// Render-ready description of an image field.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageData {
    /// File identifier.
    pub file_id: String,
    /// Absolute URL of the image.
    pub src: String,
    /// Alt text from the field's first item.
    pub alt: String,
    /// Background-position value ([`DEFAULT_FOCAL_POINT`]).
    pub focal_point: String,
    /// Background declaration embedding `src` and `focal_point`.
    pub css: String,
    /// Inspection summary.
    pub info: ImageInfo,
    /// Storage URI of the file.
    pub uri: String,
}

/// Extracts [`ImageData`] from image fields.
///
/// Stateless; both collaborators are injected at construction and only read
/// from, so a single extractor can serve concurrent callers.
pub struct ImageDataExtractor<G, I> {
    urls: G,
    inspector: I,
}

impl<G, I> ImageDataExtractor<G, I>
where
    G: UrlGenerator,
    I: ImageInspector,
{
    pub fn new(urls: G, inspector: I) -> Self {
        Self { urls, inspector }
    }

    /// Describe the image referenced by a field.
    ///
    /// Returns `Ok(None)` when the field does not reference a concrete
    /// file. A file without a storage URI yields defaults for everything
    /// except `focal_point` and `css`. Collaborator failures propagate
    /// unchanged.
    pub fn get_image_data<F>(&self, field: &F) -> Result<Option<ImageData>>
    where
        F: ImageField,
    {
        let Some(file) = field.file() else {
            debug!("image field does not reference a concrete file");
            return Ok(None);
        };

        let mut data = ImageData {
            focal_point: DEFAULT_FOCAL_POINT.to_string(),
            ..ImageData::default()
        };

        if let Some(uri) = file.uri() {
            data.file_id = file.id();
            data.src = self.urls.absolute_url(&uri)?;

            let probe = self.inspector.probe(&uri)?;
            debug!(
                "probed {uri}: {}x{}, {} bytes",
                probe.width, probe.height, probe.size
            );
            data.info = ImageInfo {
                size: probe.size,
                mime_type: file.mime_type(),
                width: probe.width,
                height: probe.height,
            };

            if let Some(alt) = field.alt() {
                data.alt = alt;
            }
            data.uri = uri;
        }

        data.css = format!(
            "background-image: url( {} ); background-position: {};",
            data.src, data.focal_point
        );

        Ok(Some(data))
    }
}

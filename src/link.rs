//! Link field normalization for rendering.
//!
//! [`link_helper`] flattens a framework link field into [`LinkProperties`],
//! the shape templates consume: resolved URL, display title with a
//! configurable fallback, tab target, optional `aria-label`, CSS modifiers.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use url::Url;

/// Fallback link text used when a link field carries no title.
pub const DEFAULT_LINK_TITLE: &str = "Learn More";

/// Read-only view of a link field value.
///
/// Implemented by the host framework's link wrapper.
pub trait Link {
    /// Resolve the destination as an absolute URL.
    ///
    /// Resolution failures propagate to the caller unchanged.
    fn url(&self) -> Result<Url>;

    /// Link text stored on the field; empty when the author left it blank.
    fn title(&self) -> &str;

    /// Whether the destination leaves the site.
    fn is_external(&self) -> bool;

    /// `aria-label` attribute from the link's option bag, if set.
    fn aria_label(&self) -> Option<&str>;
}

/// `target` attribute value for a rendered link.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum LinkTarget {
    /// Open in a new tab (`_blank`), used for external destinations.
    #[serde(rename = "_blank")]
    NewTab,
    /// Stay in the current tab (`_self`) (default).
    #[default]
    #[serde(rename = "_self")]
    SameTab,
}

impl LinkTarget {
    /// Get the attribute value.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NewTab => "_blank",
            Self::SameTab => "_self",
        }
    }
}

/// Options for [`link_helper`].
///
/// Unrecognized keys in deserialized options are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkOptions {
    /// Fallback link text when the field has none.
    pub title: String,
    /// CSS class modifiers passed through to the rendered link.
    pub modifiers: Vec<String>,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_LINK_TITLE.to_string(),
            modifiers: Vec::new(),
        }
    }
}

/// Render-ready description of a link field.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LinkProperties {
    /// Resolved absolute destination.
    pub url: String,
    /// Display title; the field's own title wins over the option fallback.
    pub title: String,
    /// Tab target derived from externality.
    pub target: LinkTarget,
    /// `aria-label` attribute, if the field set one.
    pub aria_label: Option<String>,
    /// CSS class modifiers, passed through from [`LinkOptions`].
    pub modifiers: Vec<String>,
}

/// Build [`LinkProperties`] from a link field.
///
/// The only failure mode is the link failing to resolve its URL; that error
/// propagates unchanged.
pub fn link_helper<L>(link: &L, options: LinkOptions) -> Result<LinkProperties>
where
    L: Link + ?Sized,
{
    let url = link.url()?.to_string();

    let title = match link.title() {
        "" => options.title,
        title => title.to_string(),
    };

    let target = if link.is_external() {
        LinkTarget::NewTab
    } else {
        LinkTarget::SameTab
    };

    Ok(LinkProperties {
        url,
        title,
        target,
        aria_label: link.aria_label().map(str::to_owned),
        modifiers: options.modifiers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    struct TestLink {
        url: &'static str,
        title: &'static str,
        external: bool,
        aria_label: Option<&'static str>,
        fail_resolution: bool,
    }

    impl Default for TestLink {
        fn default() -> Self {
            Self {
                url: "https://example.com/about",
                title: "",
                external: false,
                aria_label: None,
                fail_resolution: false,
            }
        }
    }

    impl Link for TestLink {
        fn url(&self) -> Result<Url> {
            if self.fail_resolution {
                return Err(anyhow!("unroutable link"));
            }
            Ok(Url::parse(self.url)?)
        }

        fn title(&self) -> &str {
            self.title
        }

        fn is_external(&self) -> bool {
            self.external
        }

        fn aria_label(&self) -> Option<&str> {
            self.aria_label
        }
    }

    #[test]
    fn test_default_title_when_field_title_empty() {
        let link = TestLink::default();
        let props = link_helper(&link, LinkOptions::default()).unwrap();
        assert_eq!(props.title, "Learn More");
        assert_eq!(props.url, "https://example.com/about");
    }

    #[test]
    fn test_option_title_only_used_as_fallback() {
        let link = TestLink::default();
        let options = LinkOptions {
            title: "Go".to_string(),
            ..Default::default()
        };
        assert_eq!(link_helper(&link, options).unwrap().title, "Go");

        let link = TestLink {
            title: "Read the docs",
            ..Default::default()
        };
        let options = LinkOptions {
            title: "Go".to_string(),
            ..Default::default()
        };
        // The field's own title wins.
        assert_eq!(link_helper(&link, options).unwrap().title, "Read the docs");
    }

    #[test]
    fn test_target_follows_externality() {
        let link = TestLink {
            external: true,
            ..Default::default()
        };
        let props = link_helper(&link, LinkOptions::default()).unwrap();
        assert_eq!(props.target, LinkTarget::NewTab);
        assert_eq!(props.target.as_str(), "_blank");

        let link = TestLink::default();
        let props = link_helper(&link, LinkOptions::default()).unwrap();
        assert_eq!(props.target, LinkTarget::SameTab);
        assert_eq!(props.target.as_str(), "_self");
    }

    #[test]
    fn test_aria_label_passthrough() {
        let link = TestLink {
            aria_label: Some("Opens the annual report"),
            ..Default::default()
        };
        let props = link_helper(&link, LinkOptions::default()).unwrap();
        assert_eq!(props.aria_label.as_deref(), Some("Opens the annual report"));

        let link = TestLink::default();
        let props = link_helper(&link, LinkOptions::default()).unwrap();
        assert_eq!(props.aria_label, None);
    }

    #[test]
    fn test_modifiers_pass_through_unchanged() {
        let link = TestLink::default();
        let options = LinkOptions {
            modifiers: vec!["button".to_string(), "button--primary".to_string()],
            ..Default::default()
        };
        let props = link_helper(&link, options).unwrap();
        assert_eq!(props.modifiers, ["button", "button--primary"]);
    }

    #[test]
    fn test_resolution_error_propagates() {
        let link = TestLink {
            fail_resolution: true,
            ..Default::default()
        };
        assert!(link_helper(&link, LinkOptions::default()).is_err());
    }

    #[test]
    fn test_options_ignore_unrecognized_keys() {
        let options: LinkOptions =
            serde_json::from_str(r#"{"title": "More", "weight": 3, "icon": "arrow"}"#).unwrap();
        assert_eq!(options.title, "More");
        assert!(options.modifiers.is_empty());
    }

    #[test]
    fn test_render_contract_keys() {
        let link = TestLink {
            external: true,
            ..Default::default()
        };
        let props = link_helper(&link, LinkOptions::default()).unwrap();
        let json = serde_json::to_value(&props).unwrap();
        assert_eq!(json["target"], "_blank");
        assert_eq!(json["ariaLabel"], serde_json::Value::Null);
        assert_eq!(json["title"], "Learn More");
    }
}

//! Raw size props as they arrive from the declarative layer.

use scene_layout::prelude::*;

/// Unparsed sizing props of one node. Missing entries mean `auto`.
///
/// # Examples
///
/// ```
/// use scene_layout::prelude::*;
/// use scene_nodes::props::SizeProps;
///
/// let props = SizeProps {
///     width: Some(RawSize::Text("calc(100% - 16px)".into())),
///     height: Some(RawSize::Number(48.0)),
///     ..SizeProps::default()
/// };
///
/// let spec = props.apply(LayoutSpec::row().gap(4.0)).unwrap();
/// assert_eq!(spec.height, SizeValue::Fixed(48.0));
/// assert_eq!(spec.gap, 4.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct SizeProps {
    /// Raw `width`.
    pub width: Option<RawSize>,
    /// Raw `height`.
    pub height: Option<RawSize>,
    /// Raw `minWidth`.
    pub min_width: Option<RawSize>,
    /// Raw `maxWidth`.
    pub max_width: Option<RawSize>,
    /// Raw `minHeight`.
    pub min_height: Option<RawSize>,
    /// Raw `maxHeight`.
    pub max_height: Option<RawSize>,
    /// Raw `flexBasis`.
    pub flex_basis: Option<RawSize>,
}

impl SizeProps {
    /// Parses every size prop and returns `base` with its sizing replaced.
    ///
    /// # Errors
    ///
    /// Returns the first [`SizeParseError`]; `base` is not modified.
    pub fn apply(&self, base: LayoutSpec) -> Result<LayoutSpec, SizeParseError> {
        let parse = |raw: &Option<RawSize>| SizeValue::from_raw(raw.as_ref());
        Ok(LayoutSpec {
            width: parse(&self.width)?,
            height: parse(&self.height)?,
            min_width: parse(&self.min_width)?,
            max_width: parse(&self.max_width)?,
            min_height: parse(&self.min_height)?,
            max_height: parse(&self.max_height)?,
            flex_basis: parse(&self.flex_basis)?,
            ..base
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_props_reset_to_auto() {
        let base = LayoutSpec::new().width(SizeValue::Fixed(10.0));
        let spec = SizeProps::default().apply(base).unwrap();
        assert!(spec.width.is_auto());
    }

    #[test]
    fn test_first_error_names_input() {
        let props = SizeProps {
            min_height: Some(RawSize::Text("tall".into())),
            ..SizeProps::default()
        };
        let err = props.apply(LayoutSpec::new()).unwrap_err();
        assert_eq!(err.input(), "tall");
    }

    #[test]
    fn test_viewport_and_percent_props() {
        let props = SizeProps {
            max_width: Some(RawSize::Text("80vw".into())),
            flex_basis: Some(RawSize::Text("25%".into())),
            ..SizeProps::default()
        };
        let spec = props.apply(LayoutSpec::new()).unwrap();
        assert_eq!(spec.max_width, SizeValue::vw(80.0));
        assert_eq!(spec.flex_basis, SizeValue::Percent(25.0));
    }
}

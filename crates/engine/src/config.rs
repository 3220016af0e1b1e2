use crate::input::InputSource;
use crate::selection::Selection;
use derive_builder::Builder;

#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub selection: Selection,
    #[builder(default)]
    pub input: InputSource,
    /// Report unreadable files and keep going instead of stopping at the first one.
    #[builder(default)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = ConfigBuilder::default().build().unwrap();
        assert_eq!(config.selection, Selection::All);
        assert_eq!(config.input, InputSource::Stdin);
        assert!(!config.force);
    }

    #[test]
    fn test_builder_setters() {
        let config = ConfigBuilder::default()
            .selection(Selection::Top(2))
            .input(InputSource::Files(vec!["a.txt".into()]))
            .force(true)
            .build()
            .unwrap();
        assert_eq!(config.selection, Selection::Top(2));
        assert!(config.force);
    }
}

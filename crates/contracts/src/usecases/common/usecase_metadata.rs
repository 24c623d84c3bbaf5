/// UseCase metadata used for identification and page titles
pub trait UseCaseMetadata {
    /// UseCase index (e.g. "u601")
    fn usecase_index() -> &'static str;

    /// Technical name (e.g. "text_to_latex")
    fn usecase_name() -> &'static str;

    /// Display name shown in the UI
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// Full name such as "u601_text_to_latex"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}

pub mod u601_text_to_latex;

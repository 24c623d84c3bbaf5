use std::fmt::Debug;

/// Opens URLs outside the current page
pub trait Navigator {
    fn open_in_new_tab(&self, url: &str) -> Result<(), String>;
}

/// `window.open(url, "_blank")`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn open_in_new_tab(&self, url: &str) -> Result<(), String> {
        let window = web_sys::window().ok_or("No window object")?;
        tab_opened(window.open_with_url_and_target(url, "_blank"))
    }
}

/// `window.open` yields no window when a popup blocker stops it
fn tab_opened<W, E: Debug>(result: Result<Option<W>, E>) -> Result<(), String> {
    match result {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err("popup blocked".to_string()),
        Err(e) => Err(format!("window.open failed: {:?}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opened_tab_is_ok() {
        assert_eq!(tab_opened(Ok::<_, String>(Some(()))), Ok(()));
    }

    #[test]
    fn test_blocked_popup_is_an_error() {
        assert_eq!(
            tab_opened(Ok::<Option<()>, String>(None)),
            Err("popup blocked".to_string())
        );
    }

    #[test]
    fn test_open_failure_keeps_cause() {
        let result = tab_opened(Err::<Option<()>, _>("SecurityError"));
        assert_eq!(result, Err("window.open failed: \"SecurityError\"".to_string()));
    }
}

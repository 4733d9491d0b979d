use crate::util::format_progress;

pub const SEPARATOR_WIDTH: usize = 60;
pub const BANNER_CAPTION: &str = "This is multiline progress test";

/// A single write the emitter makes to its sink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Emission {
    Separator,
    Caption,
    Progress { step: u64, count: u64, inplace: bool },
}

impl Emission {
    /// The three banner lines, in write order.
    pub fn banner() -> [Emission; 3] {
        [Emission::Separator, Emission::Caption, Emission::Separator]
    }

    pub fn render(&self) -> String {
        match self {
            Emission::Separator => format!("{}\n", "*".repeat(SEPARATOR_WIDTH)),
            Emission::Caption => format!("{BANNER_CAPTION}\n"),
            Emission::Progress {
                step,
                count,
                inplace,
            } => {
                // \r leaves the cursor at column 0 so the next line overwrites this one
                let terminator = if *inplace { '\r' } else { '\n' };
                format!("Progress... {}{terminator}", format_progress(*step, *count))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_is_sixty_stars() {
        let line = Emission::Separator.render();
        assert_eq!(line.len(), 61);
        assert!(line[..60].chars().all(|c| c == '*'));
        assert!(line.ends_with('\n'));
    }

    #[test]
    fn caption_line() {
        assert_eq!(
            Emission::Caption.render(),
            "This is multiline progress test\n"
        );
    }

    #[test]
    fn progress_terminators() {
        let newline = Emission::Progress {
            step: 3,
            count: 12,
            inplace: false,
        };
        assert_eq!(newline.render(), "Progress... 03/12\n");

        let inplace = Emission::Progress {
            step: 3,
            count: 12,
            inplace: true,
        };
        assert_eq!(inplace.render(), "Progress... 03/12\r");
    }
}

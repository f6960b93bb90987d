//! Phase-sectioned poem text.
//!
//! A poem is plain text split into sections by `##<phase>` header lines.
//! Every other non-empty line is split on whitespace into words that belong
//! to the most recent recognised section. A leading `*` marks a focus word.

use std::path::Path;

use crate::phase::Phase;

/// Errors that can occur while loading a poem.
#[derive(Debug, thiserror::Error)]
pub enum PoemError {
    /// The poem file could not be read.
    #[error("failed to read poem {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// One word of the poem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoemWord {
    pub text: String,
    pub phase: Phase,
    /// Set by a leading `*`. Not used by the physics.
    pub is_focus: bool,
}

impl PoemWord {
    pub fn new(text: impl Into<String>, phase: Phase) -> Self {
        Self {
            text: text.into(),
            phase,
            is_focus: false,
        }
    }
}

/// Parse poem text into words. Words before the first header are morning.
pub fn parse(content: &str) -> Vec<PoemWord> {
    let mut words = Vec::new();
    let mut phase = Phase::Morning;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(name) = trimmed.strip_prefix("##") {
            match name.parse::<Phase>() {
                Ok(section) => phase = section,
                Err(err) => tracing::debug!(%err, "ignoring poem section"),
            }
            continue;
        }

        for token in trimmed.split_whitespace() {
            let (text, is_focus) = match token.strip_prefix('*') {
                Some(rest) => (rest, true),
                None => (token, false),
            };
            if text.is_empty() {
                continue;
            }
            words.push(PoemWord {
                text: text.to_string(),
                phase,
                is_focus,
            });
        }
    }
    words
}

/// Read and parse a poem file.
pub fn load(path: &Path) -> Result<Vec<PoemWord>, PoemError> {
    let content = std::fs::read_to_string(path).map_err(|source| PoemError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let words = parse(&content);
    tracing::info!(path = %path.display(), words = words.len(), "loaded poem");
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_sections() {
        let words = parse("##morning\nsun light\n##night\nmoon shadow");
        assert_eq!(
            words,
            vec![
                PoemWord::new("sun", Phase::Morning),
                PoemWord::new("light", Phase::Morning),
                PoemWord::new("moon", Phase::Night),
                PoemWord::new("shadow", Phase::Night),
            ]
        );
    }

    #[test]
    fn test_unknown_section_keeps_previous_phase() {
        let words = parse("##dusk\nember\n##noon\nstill here");
        assert!(words.iter().all(|w| w.phase == Phase::Dusk));
        assert_eq!(words.len(), 3);
    }

    #[test]
    fn test_headers_are_case_insensitive_and_trimmed() {
        let words = parse("   ##DAWN  \n  first\tlight  ");
        assert_eq!(words.len(), 2);
        assert!(words.iter().all(|w| w.phase == Phase::Dawn));
    }

    #[test]
    fn test_focus_prefix_is_stripped() {
        let words = parse("##evening\n*hush the * lamps");
        let texts: Vec<_> = words.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, ["hush", "the", "lamps"]);
        assert!(words[0].is_focus);
        assert!(!words[1].is_focus);
    }

    #[test]
    fn test_text_before_any_header_is_morning() {
        let words = parse("orphan\n\n##afternoon\nheavy");
        assert_eq!(words[0].phase, Phase::Morning);
        assert_eq!(words[1].phase, Phase::Afternoon);
    }

    #[test]
    fn test_empty_document_yields_no_words() {
        assert!(parse("").is_empty());
        assert!(parse("##night\n\n##dawn\n").is_empty());
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let err = load(Path::new("/definitely/not/a/poem.txt")).unwrap_err();
        assert!(matches!(err, PoemError::Io { .. }));
    }
}

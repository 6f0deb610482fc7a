//! UI components for the TUI.
//!
//! This module organizes UI rendering into logical components.
//!
//! # Component Organization
//!
//! - `title_bar` - Navigation title with back button
//! - `form_view` - Sections of picker summary rows
//! - `drill_down_view` - Candidate list of the open picker
//! - `hotkeys` - Hotkey hints and last selection status
//! - `help_popup` - Help overlay with keybindings
//! - `separators` - Horizontal line separator

mod drill_down_view;
mod form_view;
mod help_popup;
mod hotkeys;
mod separators;
mod title_bar;

// Re-export all render functions for use in ui.rs
pub use drill_down_view::render_drill_down;
pub use form_view::render_form;
pub use help_popup::render_help_popup;
pub use hotkeys::render_hotkeys;
pub use separators::render_horizontal_separator;
pub use title_bar::render_title_bar;

/// Wrap text to fit within width, preserving words where possible.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut result = vec![];

    for line in text.split('\n') {
        if line.is_empty() {
            result.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        let mut current_char_count = 0;

        // Helper to split a word at character count boundary
        fn split_word_at_chars(s: &str, max_chars: usize) -> (&str, &str) {
            let char_count = s.chars().count();
            if char_count <= max_chars {
                return (s, "");
            }
            // Find byte position after max_chars characters
            let byte_pos = s
                .char_indices()
                .nth(max_chars)
                .map(|(i, _)| i)
                .unwrap_or(s.len());
            (&s[..byte_pos], &s[byte_pos..])
        }

        for word in line.split(' ') {
            let word_char_count = word.chars().count();

            if current_line.is_empty() {
                if word_char_count > width {
                    // Word is too long, split it
                    let mut remaining = word;
                    while remaining.chars().count() > width {
                        let (chunk, rest) = split_word_at_chars(remaining, width);
                        result.push(chunk.to_string());
                        remaining = rest;
                    }
                    current_line = remaining.to_string();
                    current_char_count = remaining.chars().count();
                } else {
                    current_line = word.to_string();
                    current_char_count = word_char_count;
                }
            } else if current_char_count + 1 + word_char_count > width {
                // Line would be too long, start new line
                result.push(current_line);
                if word_char_count > width {
                    let mut remaining = word;
                    while remaining.chars().count() > width {
                        let (chunk, rest) = split_word_at_chars(remaining, width);
                        result.push(chunk.to_string());
                        remaining = rest;
                    }
                    current_line = remaining.to_string();
                    current_char_count = remaining.chars().count();
                } else {
                    current_line = word.to_string();
                    current_char_count = word_char_count;
                }
            } else {
                current_line.push(' ');
                current_line.push_str(word);
                current_char_count += 1 + word_char_count;
            }
        }

        if !current_line.is_empty() {
            result.push(current_line);
        }
    }

    if result.is_empty() {
        result.push(String::new());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_breaks_on_words() {
        assert_eq!(
            wrap_text("And more customizable features", 16),
            vec!["And more", "customizable", "features"]
        );
    }

    #[test]
    fn test_wrap_text_splits_long_words() {
        assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(wrap_text("", 10), vec![""]);
    }
}

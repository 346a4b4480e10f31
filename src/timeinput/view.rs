//! View rendering for the time field.

use super::model::Model;

impl Model {
    /// Renders the prompt followed by the value, or the placeholder when empty.
    /// The cursor is only drawn while focused.
    pub fn view(&self) -> String {
        let prompt = self.prompt_style.clone().inline(true).render(&self.prompt);

        if self.value.is_empty() {
            return format!("{}{}", prompt, self.placeholder_view());
        }

        let mut v = String::new();
        let head: String = self.value[..self.pos].iter().collect();
        v.push_str(&self.text_style.clone().inline(true).render(&head));

        if !self.focus {
            let tail: String = self.value[self.pos..].iter().collect();
            v.push_str(&self.text_style.clone().inline(true).render(&tail));
            return format!("{}{}", prompt, v);
        }

        match self.value.get(self.pos) {
            Some(ch) => {
                v.push_str(&self.cursor_block(&ch.to_string()));
                let tail: String = self.value[self.pos + 1..].iter().collect();
                v.push_str(&self.text_style.clone().inline(true).render(&tail));
            }
            None => v.push_str(&self.cursor_block(" ")),
        }

        format!("{}{}", prompt, v)
    }

    fn placeholder_view(&self) -> String {
        let mut chars = self.placeholder.chars();
        if !self.focus {
            return self
                .placeholder_style
                .clone()
                .inline(true)
                .render(&self.placeholder);
        }

        // Cursor sits on the first placeholder character.
        match chars.next() {
            Some(first) => {
                let rest: String = chars.collect();
                format!(
                    "{}{}",
                    self.cursor_block(&first.to_string()),
                    self.placeholder_style.clone().inline(true).render(&rest)
                )
            }
            None => self.cursor_block(" "),
        }
    }

    fn cursor_block(&self, ch: &str) -> String {
        self.cursor_style.clone().inline(true).reverse(true).render(ch)
    }
}

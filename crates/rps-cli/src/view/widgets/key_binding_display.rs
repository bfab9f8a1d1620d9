use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::view::widgets::style;

/// Keys and the action they trigger, e.g. `(&["1", "r"], "Rock")`.
pub type KeyBinding<'a> = (&'a [&'a str], &'a str);

/// One-line help bar listing key bindings.
#[derive(Debug)]
pub struct KeyBindingDisplay<'a> {
    bindings: &'a [KeyBinding<'a>],
}

impl<'a> KeyBindingDisplay<'a> {
    pub fn new(bindings: &'a [KeyBinding<'a>]) -> Self {
        Self { bindings }
    }
}

const SEPARATOR_STYLE: Style = style::DIM;

impl Widget for KeyBindingDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![];
        for (i, (keys, desc)) in self.bindings.iter().copied().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", SEPARATOR_STYLE));
            }
            for (j, key) in keys.iter().copied().enumerate() {
                if j > 0 {
                    spans.push(Span::styled("/", SEPARATOR_STYLE));
                }
                spans.push(Span::styled(key, style::KEY));
            }
            spans.push(Span::raw(" "));
            spans.push(Span::styled(desc, style::DEFAULT));
        }

        Line::from(spans).centered().render(area, buf);
    }
}

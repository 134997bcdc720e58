//! Retained widget tree
//!
//! Holds the widgets of the one live screen, lays them out at creation
//! time and renders the whole panel in horizontal bands through the
//! [`FlushAdapter`]. Rendering happens only when something changed since
//! the last frame.
//!
//! Layouts per screen kind:
//!
//! | Kind   | Placement                                              |
//! |--------|--------------------------------------------------------|
//! | Menu   | centered column of 100x35 buttons, 10 px gap           |
//! | List   | 100x35 buttons from the top on a 40 px pitch           |
//! | Scroll | column of word-wrapped labels, scrolled as a whole     |
//! | Timer  | setpoint, countdown, start/stop button                 |
//! | Scale  | title, value, unit                                     |

use core::convert::Infallible;

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::{IntoStorage, Rgb565};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyle, TextStyleBuilder};
use heapless::{String, Vec};
use sous_core::config::DisplayConfig;
use sous_core::error::ResourceError;
use sous_core::screens::LINE_LEN;
use sous_core::state::ScreenKind;
use sous_core::traits::{ScreenHandle, Tone, WidgetEngine, WidgetId};
use sous_hal::{Delay, OutputPin, SpiBus};

use crate::error::{FlushError, TransportError};
use crate::flush::{FlushAdapter, FlushReady};
use crate::window::{DisplayWindow, Panel};

/// Widgets on one screen
pub const MAX_WIDGETS: usize = 40;

/// Longest notice text
pub const NOTICE_LEN: usize = 32;

/// Band buffer size: 16 full rows of a 128 px panel
const BAND_BYTES: usize = 128 * 16 * 2;

const BUTTON_W: u32 = 100;
const BUTTON_H: u32 = 35;
const MENU_GAP: i32 = 10;
const LIST_PITCH: i32 = 40;
const CHAR_W: u32 = 6;
const LINE_H: u32 = 12;
const MARGIN: i32 = 4;
const NOTICE_H: u32 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WidgetKind {
    Button,
    Label,
}

#[derive(Debug, Clone)]
struct Widget {
    kind: WidgetKind,
    text: String<LINE_LEN>,
    tone: Tone,
    area: Rectangle,
}

/// Buffer-return flag handed to the flush adapter
#[derive(Debug)]
struct Lease {
    returned: bool,
}

impl FlushReady for Lease {
    fn flush_ready(&mut self) {
        self.returned = true;
    }
}

/// Retained widget tree for a single live screen
pub struct WidgetTree {
    panel: Panel,
    band_rows: u16,
    kind: ScreenKind,
    live: Option<u16>,
    generation: u16,
    widgets: Vec<Widget, MAX_WIDGETS>,
    cursor: i32,
    scroll: i32,
    notice: Option<String<NOTICE_LEN>>,
    dirty: bool,
    band: [u8; BAND_BYTES],
    lease: Lease,
}

impl WidgetTree {
    pub fn new(config: &DisplayConfig) -> Self {
        Self {
            panel: Panel::from_config(config),
            band_rows: config.band_rows.max(1),
            kind: ScreenKind::Menu,
            live: None,
            generation: 0,
            widgets: Vec::new(),
            cursor: 0,
            scroll: 0,
            notice: None,
            dirty: true,
            band: [0; BAND_BYTES],
            lease: Lease { returned: true },
        }
    }

    /// Whether the next [`render`](Self::render) will draw
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Fault notice currently shown
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Draw the panel if anything changed
    ///
    /// Returns `Ok(true)` if a frame was sent. Each band is drawn into the
    /// shared buffer only after the previous band's flush handed it back.
    pub fn render<SPI, DC, RST, D>(
        &mut self,
        out: &mut FlushAdapter<SPI, DC, RST, D>,
    ) -> Result<bool, FlushError>
    where
        SPI: SpiBus,
        DC: OutputPin,
        RST: OutputPin,
        D: Delay,
    {
        if !self.dirty {
            return Ok(false);
        }

        let rows = (BAND_BYTES / self.panel.row_bytes()).min(self.band_rows as usize) as u16;
        let mut y0 = 0;
        while y0 < self.panel.height {
            if !self.lease.returned {
                return Err(FlushError::Transport(TransportError::Halted));
            }
            let window = DisplayWindow::band(y0, rows, self.panel)?;
            let len = window.byte_len();

            let scene = Scene {
                widgets: &self.widgets,
                wrapped: self.kind == ScreenKind::Scroll,
                offset: self.scroll_offset(),
                columns: self.columns(),
                notice: self.notice.as_deref(),
                panel: self.panel,
            };
            let mut band = Band {
                bytes: &mut self.band[..len],
                window,
                panel: self.panel,
            };
            scene.draw(&mut band);

            self.lease.returned = false;
            out.flush(&window, &self.band[..len], &mut self.lease)?;
            y0 = window.y1() + 1;
        }

        self.dirty = false;
        Ok(true)
    }

    fn scroll_offset(&self) -> i32 {
        match self.kind {
            ScreenKind::Scroll | ScreenKind::List => self.scroll,
            _ => 0,
        }
    }

    fn columns(&self) -> usize {
        ((self.panel.width as u32).saturating_sub(2 * MARGIN as u32) / CHAR_W) as usize
    }

    fn check(&self, screen: ScreenHandle) -> Result<(), ResourceError> {
        if self.live == Some(screen.0) {
            Ok(())
        } else {
            Err(ResourceError::StaleHandle)
        }
    }

    fn widget_mut(&mut self, widget: WidgetId) -> Option<&mut Widget> {
        self.live?;
        self.widgets.get_mut(widget.0 as usize)
    }

    fn content_bottom(&self) -> i32 {
        self.widgets
            .iter()
            .map(|w| w.area.top_left.y + w.area.size.height as i32)
            .max()
            .unwrap_or(0)
            + MARGIN
    }

    fn top_margin(kind: ScreenKind) -> i32 {
        match kind {
            ScreenKind::Menu => 10,
            ScreenKind::List => 5,
            ScreenKind::Scroll => MARGIN,
            ScreenKind::Timer => 16,
            ScreenKind::Scale => 30,
        }
    }

    fn label_gap(kind: ScreenKind) -> i32 {
        match kind {
            ScreenKind::Timer => 24,
            ScreenKind::Scale => 20,
            _ => 6,
        }
    }

    fn place_button(&mut self) -> Rectangle {
        let x = (self.panel.width as i32 - BUTTON_W as i32) / 2;
        let area = Rectangle::new(Point::new(x, self.cursor), Size::new(BUTTON_W, BUTTON_H));
        self.cursor += match self.kind {
            ScreenKind::List => LIST_PITCH,
            _ => BUTTON_H as i32 + MENU_GAP,
        };
        area
    }

    fn place_label(&mut self, text: &str) -> Rectangle {
        let area = if self.kind == ScreenKind::Scroll {
            let lines = wrap(text, self.columns()).count().max(1) as u32;
            Rectangle::new(
                Point::new(MARGIN, self.cursor),
                Size::new(self.panel.width as u32 - 2 * MARGIN as u32, lines * LINE_H),
            )
        } else {
            Rectangle::new(
                Point::new(0, self.cursor),
                Size::new(self.panel.width as u32, LINE_H),
            )
        };
        self.cursor += area.size.height as i32 + Self::label_gap(self.kind);
        area
    }

    fn add(
        &mut self,
        screen: ScreenHandle,
        kind: WidgetKind,
        text: &str,
    ) -> Result<WidgetId, ResourceError> {
        self.check(screen)?;
        if self.widgets.is_full() {
            return Err(ResourceError::WidgetsExhausted);
        }
        let area = match kind {
            WidgetKind::Button => self.place_button(),
            WidgetKind::Label => self.place_label(text),
        };
        let id = WidgetId(self.widgets.len() as u16);
        self.widgets
            .push(Widget {
                kind,
                text: truncated(text),
                tone: Tone::Plain,
                area,
            })
            .map_err(|_| ResourceError::WidgetsExhausted)?;
        self.dirty = true;
        Ok(id)
    }

    /// Scroll a list so the given area is on screen
    fn reveal(&mut self, area: Rectangle) {
        let top = area.top_left.y - Self::top_margin(self.kind);
        let bottom = area.top_left.y + area.size.height as i32 + MARGIN;
        let height = self.panel.height as i32;
        if top < self.scroll {
            self.scroll = top;
        } else if bottom - self.scroll > height {
            self.scroll = bottom - height;
        }
        self.scroll = self.scroll.clamp(0, (self.content_bottom() - height).max(0));
    }
}

impl WidgetEngine for WidgetTree {
    fn create_screen(&mut self, kind: ScreenKind) -> Result<ScreenHandle, ResourceError> {
        if self.live.is_some() {
            return Err(ResourceError::ScreenBusy);
        }
        self.generation = self.generation.wrapping_add(1);
        self.live = Some(self.generation);
        self.kind = kind;
        self.widgets.clear();
        self.cursor = Self::top_margin(kind);
        self.scroll = 0;
        self.notice = None;
        self.dirty = true;
        Ok(ScreenHandle(self.generation))
    }

    fn destroy_screen(&mut self, screen: ScreenHandle) -> Result<(), ResourceError> {
        self.check(screen)?;
        self.live = None;
        self.widgets.clear();
        self.notice = None;
        self.scroll = 0;
        self.dirty = true;
        Ok(())
    }

    fn create_button(&mut self, screen: ScreenHandle, text: &str) -> Result<WidgetId, ResourceError> {
        self.add(screen, WidgetKind::Button, text)
    }

    fn create_label(&mut self, screen: ScreenHandle, text: &str) -> Result<WidgetId, ResourceError> {
        self.add(screen, WidgetKind::Label, text)
    }

    fn set_tone(&mut self, widget: WidgetId, tone: Tone) {
        let kind = self.kind;
        let Some(w) = self.widget_mut(widget) else {
            return;
        };
        if w.tone == tone {
            return;
        }
        w.tone = tone;
        let area = w.area;
        if kind == ScreenKind::List && tone == Tone::Highlight {
            self.reveal(area);
        }
        self.dirty = true;
    }

    fn set_text(&mut self, widget: WidgetId, text: &str) -> Result<(), ResourceError> {
        let w = self.widget_mut(widget).ok_or(ResourceError::StaleHandle)?;
        if w.text.as_str() != text {
            w.text = truncated(text);
            self.dirty = true;
        }
        Ok(())
    }

    fn text(&self, widget: WidgetId) -> Option<&str> {
        self.live?;
        self.widgets.get(widget.0 as usize).map(|w| w.text.as_str())
    }

    fn scroll_by(&mut self, screen: ScreenHandle, dy: i32) {
        if self.check(screen).is_err() {
            return;
        }
        let max = self.max_scroll(screen);
        let next = self.scroll.saturating_add(dy).clamp(0, max);
        if next != self.scroll {
            self.scroll = next;
            self.dirty = true;
        }
    }

    fn scroll_y(&self, screen: ScreenHandle) -> i32 {
        match self.check(screen) {
            Ok(()) => self.scroll,
            Err(_) => 0,
        }
    }

    fn max_scroll(&self, screen: ScreenHandle) -> i32 {
        if self.check(screen).is_err() {
            return 0;
        }
        (self.content_bottom() - self.panel.height as i32).max(0)
    }

    fn show_notice(&mut self, screen: ScreenHandle, text: &str) -> Result<(), ResourceError> {
        self.check(screen)?;
        self.notice = Some(truncated(text));
        self.dirty = true;
        Ok(())
    }

    fn invalidate(&mut self) {
        self.dirty = true;
    }
}

/// Borrowed view of everything drawn in one frame
struct Scene<'a> {
    widgets: &'a [Widget],
    wrapped: bool,
    offset: i32,
    columns: usize,
    notice: Option<&'a str>,
    panel: Panel,
}

impl Scene<'_> {
    fn draw(&self, band: &mut Band<'_>) {
        let _ = band.clear(Rgb565::BLACK);

        for widget in self.widgets {
            let area = widget.area.translate(Point::new(0, -self.offset));
            if !band.overlaps(&area) {
                continue;
            }
            match widget.kind {
                WidgetKind::Button => draw_button(band, widget, area),
                WidgetKind::Label if self.wrapped => {
                    draw_wrapped(band, &widget.text, area, self.columns)
                }
                WidgetKind::Label => draw_centered(band, &widget.text, area),
            }
        }

        if let Some(notice) = self.notice {
            let area = Rectangle::new(
                Point::new(0, self.panel.height as i32 - NOTICE_H as i32),
                Size::new(self.panel.width as u32, NOTICE_H),
            );
            if band.overlaps(&area) {
                let _ = area
                    .into_styled(PrimitiveStyle::with_fill(Rgb565::RED))
                    .draw(band);
                let _ = Text::with_text_style(
                    notice,
                    area.center(),
                    MonoTextStyle::new(&FONT_6X10, Rgb565::WHITE),
                    centered(),
                )
                .draw(band);
            }
        }
    }
}

/// One horizontal strip of the panel, addressed in panel coordinates
struct Band<'b> {
    bytes: &'b mut [u8],
    window: DisplayWindow,
    panel: Panel,
}

impl Band<'_> {
    fn overlaps(&self, area: &Rectangle) -> bool {
        let top = area.top_left.y;
        let bottom = top + area.size.height as i32;
        bottom > self.window.y0() as i32 && top <= self.window.y1() as i32
    }
}

impl OriginDimensions for Band<'_> {
    fn size(&self) -> Size {
        Size::new(self.panel.width as u32, self.panel.height as u32)
    }
}

impl DrawTarget for Band<'_> {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let w = self.window;
        for Pixel(p, color) in pixels {
            if p.x < w.x0() as i32
                || p.x > w.x1() as i32
                || p.y < w.y0() as i32
                || p.y > w.y1() as i32
            {
                continue;
            }
            let row = (p.y - w.y0() as i32) as usize;
            let col = (p.x - w.x0() as i32) as usize;
            let at = (row * w.width() as usize + col) * 2;
            if let Some(px) = self.bytes.get_mut(at..at + 2) {
                px.copy_from_slice(&color.into_storage().to_be_bytes());
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let [hi, lo] = color.into_storage().to_be_bytes();
        for px in self.bytes.chunks_exact_mut(2) {
            px[0] = hi;
            px[1] = lo;
        }
        Ok(())
    }
}

fn centered() -> TextStyle {
    TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Middle)
        .build()
}

fn tone_colors(tone: Tone) -> (Rgb565, Rgb565) {
    match tone {
        Tone::Plain => (Rgb565::WHITE, Rgb565::BLACK),
        Tone::Highlight => (Rgb565::RED, Rgb565::WHITE),
        Tone::Go => (Rgb565::GREEN, Rgb565::WHITE),
    }
}

fn draw_button(band: &mut Band<'_>, widget: &Widget, area: Rectangle) {
    let (bg, fg) = tone_colors(widget.tone);
    let _ = area.into_styled(PrimitiveStyle::with_fill(bg)).draw(band);
    let _ = Text::with_text_style(
        &widget.text,
        area.center(),
        MonoTextStyle::new(&FONT_6X10, fg),
        centered(),
    )
    .draw(band);
}

fn draw_centered(band: &mut Band<'_>, text: &str, area: Rectangle) {
    let _ = Text::with_text_style(
        text,
        area.center(),
        MonoTextStyle::new(&FONT_6X10, Rgb565::WHITE),
        centered(),
    )
    .draw(band);
}

fn draw_wrapped(band: &mut Band<'_>, text: &str, area: Rectangle, columns: usize) {
    let style = MonoTextStyle::new(&FONT_6X10, Rgb565::WHITE);
    for (i, line) in wrap(text, columns).enumerate() {
        let origin = area.top_left + Point::new(0, i as i32 * LINE_H as i32);
        let _ = Text::with_baseline(line, origin, style, Baseline::Top).draw(band);
    }
}

/// Copy as much of `text` as fits
fn truncated<const N: usize>(text: &str) -> String<N> {
    let mut out = String::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

/// Split text into lines of at most `columns` characters, breaking at
/// spaces where possible
pub fn wrap(text: &str, columns: usize) -> Wrap<'_> {
    Wrap {
        rest: text,
        columns: columns.max(1),
    }
}

/// Iterator returned by [`wrap`]
pub struct Wrap<'a> {
    rest: &'a str,
    columns: usize,
}

impl<'a> Iterator for Wrap<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest.trim_start_matches(' ');
        if rest.is_empty() {
            self.rest = rest;
            return None;
        }

        let Some((limit, _)) = rest.char_indices().nth(self.columns) else {
            self.rest = "";
            return Some(rest);
        };

        // A space right at the limit ends the line cleanly
        let split = if rest[limit..].starts_with(' ') {
            limit
        } else {
            match rest[..limit].rfind(' ') {
                Some(space) if space > 0 => space,
                _ => limit,
            }
        };

        self.rest = &rest[split..];
        Some(rest[..split].trim_end_matches(' '))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::st7735::cmd;
    use crate::transport::mock::{transport, Bus, MockDc, MockDelay, MockRst, MockSpi, Wire};
    use std::vec::Vec as StdVec;

    type Adapter = FlushAdapter<MockSpi, MockDc, MockRst, MockDelay>;

    fn adapter() -> (Adapter, Bus) {
        let (t, bus) = transport(1024);
        let mut a = FlushAdapter::new(t, &DisplayConfig::default());
        a.init().unwrap();
        bus.borrow_mut().log.clear();
        (a, bus)
    }

    /// Every pixel byte sent after a RAMWR, in order
    fn frame(bus: &Bus) -> StdVec<u8> {
        let mut out = StdVec::new();
        let mut streaming = false;
        for w in bus.borrow().log.iter() {
            match w {
                Wire::Command(c) => streaming = *c == cmd::RAMWR,
                Wire::Data(d) if streaming => out.extend_from_slice(d),
                _ => {}
            }
        }
        out
    }

    fn pixel(frame: &[u8], x: usize, y: usize) -> u16 {
        let at = (y * 128 + x) * 2;
        u16::from_be_bytes([frame[at], frame[at + 1]])
    }

    fn tree() -> WidgetTree {
        WidgetTree::new(&DisplayConfig::default())
    }

    #[test]
    fn test_one_live_screen() {
        let mut t = tree();
        let s = t.create_screen(ScreenKind::Menu).unwrap();
        assert_eq!(t.create_screen(ScreenKind::List), Err(ResourceError::ScreenBusy));
        t.destroy_screen(s).unwrap();
        assert_eq!(t.destroy_screen(s), Err(ResourceError::StaleHandle));

        let next = t.create_screen(ScreenKind::List).unwrap();
        assert_ne!(next, s);
        assert_eq!(t.create_button(s, "old"), Err(ResourceError::StaleHandle));
    }

    #[test]
    fn test_menu_layout() {
        let mut t = tree();
        let s = t.create_screen(ScreenKind::Menu).unwrap();
        for label in ["Recipes", "Scale", "Timer"] {
            t.create_button(s, label).unwrap();
        }
        let tops: StdVec<i32> = t.widgets.iter().map(|w| w.area.top_left.y).collect();
        assert_eq!(tops, [10, 55, 100]);
        assert!(t.widgets.iter().all(|w| w.area.top_left.x == 14));
        assert!(t.widgets.iter().all(|w| w.area.size == Size::new(100, 35)));
        assert_eq!(t.max_scroll(s), 0);
    }

    #[test]
    fn test_list_pitch_and_reveal() {
        let mut t = tree();
        let s = t.create_screen(ScreenKind::List).unwrap();
        for i in 0..6 {
            t.create_button(s, if i % 2 == 0 { "Pasta" } else { "Toast" }).unwrap();
        }
        assert_eq!(t.widgets[1].area.top_left.y - t.widgets[0].area.top_left.y, 40);

        t.set_tone(WidgetId(5), Tone::Highlight);
        let area = t.widgets[5].area;
        let bottom = area.top_left.y + area.size.height as i32 - t.scroll_y(s);
        assert!(bottom <= 160);

        t.set_tone(WidgetId(5), Tone::Plain);
        t.set_tone(WidgetId(0), Tone::Highlight);
        assert_eq!(t.scroll_y(s), 0);
    }

    #[test]
    fn test_scroll_limits() {
        let mut t = tree();
        let s = t.create_screen(ScreenKind::Scroll).unwrap();
        for _ in 0..10 {
            t.create_label(s, "Stir the sauce gently and let it simmer for ten minutes")
                .unwrap();
        }
        let max = t.max_scroll(s);
        assert!(max > 0);

        t.scroll_by(s, -25);
        assert_eq!(t.scroll_y(s), 0);
        t.scroll_by(s, max + 100);
        assert_eq!(t.scroll_y(s), max);
    }

    #[test]
    fn test_widgets_exhausted() {
        let mut t = tree();
        let s = t.create_screen(ScreenKind::Scroll).unwrap();
        for _ in 0..MAX_WIDGETS {
            t.create_label(s, "x").unwrap();
        }
        assert_eq!(t.create_label(s, "x"), Err(ResourceError::WidgetsExhausted));
    }

    #[test]
    fn test_text_roundtrip_and_stale_widget() {
        let mut t = tree();
        let s = t.create_screen(ScreenKind::Scale).unwrap();
        let value = t.create_label(s, "0.0").unwrap();
        t.set_text(value, "152.5").unwrap();
        assert_eq!(t.text(value), Some("152.5"));

        t.destroy_screen(s).unwrap();
        assert_eq!(t.text(value), None);
        assert_eq!(t.set_text(value, "1.0"), Err(ResourceError::StaleHandle));
    }

    #[test]
    fn test_notice_cleared_with_screen() {
        let mut t = tree();
        let s = t.create_screen(ScreenKind::Menu).unwrap();
        t.show_notice(s, "No ingredients").unwrap();
        assert_eq!(t.notice(), Some("No ingredients"));
        t.destroy_screen(s).unwrap();
        assert_eq!(t.notice(), None);
    }

    #[test]
    fn test_render_full_frame_in_bands() {
        let (mut out, bus) = adapter();
        let mut t = tree();
        let s = t.create_screen(ScreenKind::Menu).unwrap();
        let first = t.create_button(s, "Recipes").unwrap();
        t.create_button(s, "Scale").unwrap();
        t.set_tone(first, Tone::Highlight);

        assert!(t.render(&mut out).unwrap());
        let pixels = frame(&bus);
        assert_eq!(pixels.len(), 128 * 160 * 2);

        let ramwr = bus
            .borrow()
            .log
            .iter()
            .filter(|w| **w == Wire::Command(cmd::RAMWR))
            .count();
        assert_eq!(ramwr, 10);

        // Corner of the highlighted button, away from its text
        assert_eq!(pixel(&pixels, 15, 11), Rgb565::RED.into_storage());
        // Corner of the plain button
        assert_eq!(pixel(&pixels, 15, 56), Rgb565::WHITE.into_storage());
        // Background
        assert_eq!(pixel(&pixels, 2, 2), 0);
    }

    #[test]
    fn test_render_only_when_dirty() {
        let (mut out, bus) = adapter();
        let mut t = tree();
        t.create_screen(ScreenKind::Timer).unwrap();
        assert!(t.render(&mut out).unwrap());

        let writes = bus.borrow().writes;
        assert!(!t.render(&mut out).unwrap());
        assert_eq!(bus.borrow().writes, writes);

        t.invalidate();
        assert!(t.is_dirty());
        assert!(t.render(&mut out).unwrap());
    }

    #[test]
    fn test_failed_render_stays_dirty() {
        let (mut out, bus) = adapter();
        let mut t = tree();
        t.create_screen(ScreenKind::Menu).unwrap();
        let next = bus.borrow().writes + 7;
        bus.borrow_mut().fail_at = Some(next);

        assert_eq!(
            t.render(&mut out),
            Err(FlushError::Transport(TransportError::Bus))
        );
        assert!(t.is_dirty());
        assert_eq!(
            t.render(&mut out),
            Err(FlushError::Transport(TransportError::Halted))
        );
    }

    #[test]
    fn test_wrap_breaks_at_spaces() {
        let lines: StdVec<&str> = wrap("Boil the water in a large pot", 10).collect();
        assert_eq!(lines, ["Boil the", "water in a", "large pot"]);
    }

    #[test]
    fn test_wrap_hard_splits_long_words() {
        let lines: StdVec<&str> = wrap("abcdefghijkl", 5).collect();
        assert_eq!(lines, ["abcde", "fghij", "kl"]);
        assert_eq!(wrap("", 5).count(), 0);
    }
}

//! Screen controller
//!
//! Owns the active screen, the recipe context, the countdown and the
//! buzzer. Every widget mutation in the system goes through here, and the
//! firmware calls it from a single task.
//!
//! A transition runs in a fixed order:
//!
//! 1. prepare the incoming screen's content (may fail, nothing torn down)
//! 2. stop the outgoing poller and wait for its acknowledgement
//! 3. destroy the outgoing widget tree
//! 4. build the incoming widget tree
//! 5. start the incoming poller
//! 6. request a full redraw

use crate::config::{DeviceConfig, UiConfig};
use crate::error::{ProtocolError, ResourceError, TransitionError};
use crate::lifecycle::PollerControl;
use crate::recipe::{RecipeBook, RecipeContext};
use crate::scale::format_grams;
use crate::screens::{self, BuiltScreen};
use crate::state::{route, LogicalButton, Route, ScreenId, Step, TimerAction};
use crate::timer::{format_mmss, Tick, TimerState};
use crate::traits::{Buzzer, SensorError, Tone, WidgetEngine};

/// Result of handling one button press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Screen unchanged (highlight, scroll or timer may have moved)
    Stayed,
    /// Transition completed
    Moved { from: ScreenId, to: ScreenId },
    /// Incoming screen could not be prepared; previous screen kept
    Faulted { target: ScreenId, error: ProtocolError },
    /// Press only silenced the alarm
    Silenced,
}

/// Navigation controller
pub struct Controller<'a, W: WidgetEngine, B: Buzzer> {
    engine: W,
    buzzer: B,
    ctx: RecipeContext<'a>,
    ui: UiConfig,
    timer: TimerState,
    active: Option<BuiltScreen>,
    fault: Option<ProtocolError>,
}

impl<'a, W: WidgetEngine, B: Buzzer> Controller<'a, W, B> {
    pub fn new(engine: W, buzzer: B, book: &'a RecipeBook, config: &DeviceConfig) -> Self {
        Self {
            engine,
            buzzer,
            ctx: RecipeContext::new(book),
            ui: config.ui,
            timer: TimerState::new(&config.timer),
            active: None,
            fault: None,
        }
    }

    /// Show the home screen and start its poller
    pub async fn start<P: PollerControl>(&mut self, poller: &mut P) -> Result<(), TransitionError> {
        match self.transition(ScreenId::Home, poller).await? {
            Outcome::Faulted { error, .. } => Err(error.into()),
            _ => Ok(()),
        }
    }

    /// Identity of the active screen
    pub fn active(&self) -> Option<ScreenId> {
        self.active.as_ref().map(|s| s.id)
    }

    /// Last protocol fault, cleared by the next successful transition
    pub fn fault(&self) -> Option<ProtocolError> {
        self.fault
    }

    pub fn context(&self) -> &RecipeContext<'a> {
        &self.ctx
    }

    pub fn timer(&self) -> &TimerState {
        &self.timer
    }

    pub fn engine(&self) -> &W {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut W {
        &mut self.engine
    }

    pub fn buzzer(&self) -> &B {
        &self.buzzer
    }

    /// Highlighted index on selectable screens
    pub fn highlighted(&self) -> Option<usize> {
        self.active.as_ref()?.nav.map(|n| n.index())
    }

    /// Scroll offset on content screens
    pub fn scroll_offset(&self) -> Option<i32> {
        self.active.as_ref()?.scroll.map(|s| s.offset())
    }

    /// Apply one logical button press to the active screen
    pub async fn handle<P: PollerControl>(
        &mut self,
        button: LogicalButton,
        poller: &mut P,
    ) -> Result<Outcome, ResourceError> {
        if self.buzzer.is_on() {
            self.buzzer.set_on(false);
            return Ok(Outcome::Silenced);
        }

        let Some(id) = self.active() else {
            return Ok(Outcome::Stayed);
        };

        match route(id, button) {
            Route::Ignore => Ok(Outcome::Stayed),
            Route::Highlight(step) => {
                self.move_highlight(step);
                Ok(Outcome::Stayed)
            }
            Route::Scroll(step) => {
                self.scroll(step);
                Ok(Outcome::Stayed)
            }
            Route::Commit => self.commit(poller).await,
            Route::Goto(target) => self.transition(target, poller).await,
            Route::Timer(action) => {
                self.timer_action(action)?;
                Ok(Outcome::Stayed)
            }
        }
    }

    /// Advance the countdown by one second
    ///
    /// Sounds the buzzer on the tick that reaches zero.
    pub fn tick_timer(&mut self) -> Result<Tick, ResourceError> {
        let tick = self.timer.tick();
        match tick {
            Tick::Idle => {}
            Tick::Running(_) => self.sync_timer_widgets()?,
            Tick::Expired => {
                self.buzzer.set_on(true);
                self.sync_timer_widgets()?;
            }
        }
        Ok(tick)
    }

    /// Show a weight reading if the scale screen is active
    pub fn show_weight(&mut self, reading: Result<f32, SensorError>) -> Result<(), ResourceError> {
        if let Some(label) = self.active.as_ref().and_then(|s| s.reading) {
            self.engine.set_text(label, &format_grams(reading))?;
        }
        Ok(())
    }

    async fn transition<P: PollerControl>(
        &mut self,
        target: ScreenId,
        poller: &mut P,
    ) -> Result<Outcome, ResourceError> {
        let plan = match screens::prepare(target, &self.ctx) {
            Ok(plan) => plan,
            Err(error) => {
                self.report_fault(error)?;
                return Ok(Outcome::Faulted { target, error });
            }
        };

        let from = self.active();
        if let Some(outgoing) = self.active.take() {
            poller.stop_and_join().await;
            self.engine.destroy_screen(outgoing.handle)?;
        }

        self.active = Some(screens::build(target, &plan, &mut self.engine, &self.ui)?);
        self.fault = None;
        self.sync_timer_widgets()?;

        poller.start(target, target.descriptor().buttons)?;
        self.engine.invalidate();

        Ok(match from {
            Some(from) => Outcome::Moved { from, to: target },
            None => Outcome::Stayed,
        })
    }

    async fn commit<P: PollerControl>(&mut self, poller: &mut P) -> Result<Outcome, ResourceError> {
        let Some((id, index)) = self
            .active
            .as_ref()
            .map(|s| (s.id, s.nav.map(|n| n.index()).unwrap_or(0)))
        else {
            return Ok(Outcome::Stayed);
        };

        if id == ScreenId::RecipeList {
            let book = self.ctx.book();
            let Some(recipe) = book.recipes().get(index) else {
                return Ok(Outcome::Stayed);
            };

            let previous = self.ctx.snapshot();
            if let Err(error) = self.ctx.select_dish(recipe.name.as_str()) {
                self.report_fault(error)?;
                return Ok(Outcome::Faulted {
                    target: ScreenId::RecipeInfo,
                    error,
                });
            }

            let outcome = self.transition(ScreenId::RecipeInfo, poller).await?;
            if matches!(outcome, Outcome::Faulted { .. }) {
                self.ctx.restore_dish(previous);
            }
            return Ok(outcome);
        }

        match id.menu().and_then(|menu| menu.get(index)) {
            Some(entry) => self.transition(entry.target, poller).await,
            None => Ok(Outcome::Stayed),
        }
    }

    fn move_highlight(&mut self, step: Step) {
        let Some(screen) = self.active.as_mut() else {
            return;
        };
        let Some(nav) = screen.nav.as_mut() else {
            return;
        };

        let old = nav.index();
        let new = nav.step(step);
        if old == new {
            return;
        }
        if let Some(&widget) = screen.items.get(old) {
            self.engine.set_tone(widget, Tone::Plain);
        }
        if let Some(&widget) = screen.items.get(new) {
            self.engine.set_tone(widget, Tone::Highlight);
        }
    }

    fn scroll(&mut self, step: Step) {
        let Some(screen) = self.active.as_mut() else {
            return;
        };
        let Some(scroll) = screen.scroll.as_mut() else {
            return;
        };

        let delta = scroll.step(step);
        if delta != 0 {
            self.engine.scroll_by(screen.handle, delta);
        }
    }

    fn timer_action(&mut self, action: TimerAction) -> Result<(), ResourceError> {
        match action {
            TimerAction::Increase => {
                self.timer.increment();
            }
            TimerAction::Decrease => {
                self.timer.decrement();
            }
            TimerAction::Toggle => {
                self.timer.toggle();
            }
        }
        self.sync_timer_widgets()
    }

    fn sync_timer_widgets(&mut self) -> Result<(), ResourceError> {
        let Some(widgets) = self.active.as_ref().and_then(|s| s.timer) else {
            return Ok(());
        };

        self.engine
            .set_text(widgets.setpoint, &format_mmss(self.timer.setpoint_s()))?;
        self.engine
            .set_text(widgets.countdown, &format_mmss(self.timer.remaining_s()))?;

        let (label, tone) = if self.timer.is_running() {
            ("Stop", Tone::Highlight)
        } else {
            ("Start", Tone::Go)
        };
        self.engine.set_text(widgets.button, label)?;
        self.engine.set_tone(widgets.button, tone);
        Ok(())
    }

    fn report_fault(&mut self, error: ProtocolError) -> Result<(), ResourceError> {
        self.fault = Some(error);
        if let Some(screen) = self.active.as_ref() {
            self.engine.show_notice(screen.handle, error.notice())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::Recipe;
    use crate::state::{ButtonMask, ScreenKind};
    use crate::traits::{ScreenHandle, WidgetId};
    use core::cell::RefCell;
    use embassy_futures::block_on;
    use heapless::{String, Vec};

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        CreateScreen(ScreenKind),
        DestroyScreen,
        Button(String<32>),
        Label(String<112>),
        Notice,
        ScrollBy(i32),
        Invalidate,
        PollerStop,
        PollerStart(ScreenId),
    }

    type Log = RefCell<Vec<Op, 256>>;

    fn record(log: &Log, op: Op) {
        log.borrow_mut().push(op).unwrap();
    }

    struct FakeEngine<'l> {
        log: &'l Log,
        live: Option<u16>,
        next_handle: u16,
        widgets: Vec<(String<112>, Tone), 64>,
        scroll: i32,
    }

    impl<'l> FakeEngine<'l> {
        fn new(log: &'l Log) -> Self {
            Self {
                log,
                live: None,
                next_handle: 0,
                widgets: Vec::new(),
                scroll: 0,
            }
        }

        fn tone(&self, widget: WidgetId) -> Tone {
            self.widgets[widget.0 as usize].1
        }

        fn add(&mut self, screen: ScreenHandle, text: &str) -> Result<WidgetId, ResourceError> {
            if self.live != Some(screen.0) {
                return Err(ResourceError::StaleHandle);
            }
            let id = WidgetId(self.widgets.len() as u16);
            self.widgets
                .push((String::try_from(text).unwrap(), Tone::Plain))
                .map_err(|_| ResourceError::WidgetsExhausted)?;
            Ok(id)
        }
    }

    impl WidgetEngine for FakeEngine<'_> {
        fn create_screen(&mut self, kind: ScreenKind) -> Result<ScreenHandle, ResourceError> {
            if self.live.is_some() {
                return Err(ResourceError::ScreenBusy);
            }
            self.next_handle += 1;
            self.live = Some(self.next_handle);
            self.widgets.clear();
            self.scroll = 0;
            record(self.log, Op::CreateScreen(kind));
            Ok(ScreenHandle(self.next_handle))
        }

        fn destroy_screen(&mut self, screen: ScreenHandle) -> Result<(), ResourceError> {
            if self.live != Some(screen.0) {
                return Err(ResourceError::StaleHandle);
            }
            self.live = None;
            record(self.log, Op::DestroyScreen);
            Ok(())
        }

        fn create_button(&mut self, screen: ScreenHandle, text: &str) -> Result<WidgetId, ResourceError> {
            record(self.log, Op::Button(String::try_from(text).unwrap()));
            self.add(screen, text)
        }

        fn create_label(&mut self, screen: ScreenHandle, text: &str) -> Result<WidgetId, ResourceError> {
            record(self.log, Op::Label(String::try_from(text).unwrap()));
            self.add(screen, text)
        }

        fn set_tone(&mut self, widget: WidgetId, tone: Tone) {
            self.widgets[widget.0 as usize].1 = tone;
        }

        fn set_text(&mut self, widget: WidgetId, text: &str) -> Result<(), ResourceError> {
            self.widgets[widget.0 as usize].0 = String::try_from(text).unwrap();
            Ok(())
        }

        fn text(&self, widget: WidgetId) -> Option<&str> {
            self.widgets.get(widget.0 as usize).map(|w| w.0.as_str())
        }

        fn scroll_by(&mut self, _screen: ScreenHandle, dy: i32) {
            self.scroll += dy;
            record(self.log, Op::ScrollBy(dy));
        }

        fn scroll_y(&self, _screen: ScreenHandle) -> i32 {
            self.scroll
        }

        fn max_scroll(&self, _screen: ScreenHandle) -> i32 {
            60
        }

        fn show_notice(&mut self, _screen: ScreenHandle, _text: &str) -> Result<(), ResourceError> {
            record(self.log, Op::Notice);
            Ok(())
        }

        fn invalidate(&mut self) {
            record(self.log, Op::Invalidate);
        }
    }

    struct FakePoller<'l> {
        log: &'l Log,
        live: bool,
    }

    impl PollerControl for FakePoller<'_> {
        async fn stop_and_join(&mut self) {
            assert!(self.live, "stop requested with no live poller");
            self.live = false;
            record(self.log, Op::PollerStop);
        }

        fn start(&mut self, screen: ScreenId, _buttons: ButtonMask) -> Result<(), ResourceError> {
            assert!(!self.live, "second poller started");
            self.live = true;
            record(self.log, Op::PollerStart(screen));
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeBuzzer {
        on: bool,
        activations: u32,
    }

    impl Buzzer for FakeBuzzer {
        fn set_on(&mut self, on: bool) {
            if on && !self.on {
                self.activations += 1;
            }
            self.on = on;
        }

        fn is_on(&self) -> bool {
            self.on
        }
    }

    fn pasta_book() -> RecipeBook {
        let mut pasta = Recipe::new("Pasta").unwrap();
        pasta.push_ingredient("Spaghetti", "200 g").unwrap();
        pasta.push_ingredient("Salt", "1 tsp").unwrap();
        pasta.push_step("Boil water").unwrap();
        pasta.push_step("Add pasta").unwrap();
        pasta.push_step("Drain").unwrap();

        let mut book = RecipeBook::empty();
        book.push(pasta).unwrap();
        book.push(Recipe::new("Toast").unwrap()).unwrap();
        book
    }

    type TestController<'a, 'l> = Controller<'a, FakeEngine<'l>, FakeBuzzer>;

    fn started<'a, 'l>(book: &'a RecipeBook, log: &'l Log) -> (TestController<'a, 'l>, FakePoller<'l>) {
        let mut controller = Controller::new(
            FakeEngine::new(log),
            FakeBuzzer::default(),
            book,
            &DeviceConfig::default(),
        );
        let mut poller = FakePoller { log, live: false };
        block_on(controller.start(&mut poller)).unwrap();
        (controller, poller)
    }

    fn press(c: &mut TestController<'_, '_>, p: &mut FakePoller<'_>, button: LogicalButton) -> Outcome {
        block_on(c.handle(button, p)).unwrap()
    }

    fn labels_since_last_screen(log: &Log) -> Vec<String<112>, 32> {
        let log = log.borrow();
        let start = log
            .iter()
            .rposition(|op| matches!(op, Op::CreateScreen(_)))
            .unwrap();
        log[start..]
            .iter()
            .filter_map(|op| match op {
                Op::Label(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    fn position(log: &Log, from: usize, op: &Op) -> usize {
        from + log.borrow()[from..].iter().position(|o| o == op).unwrap()
    }

    #[test]
    fn test_start_shows_home() {
        let book = pasta_book();
        let log = Log::default();
        let (c, _p) = started(&book, &log);

        assert_eq!(c.active(), Some(ScreenId::Home));
        assert_eq!(c.highlighted(), Some(0));
        assert_eq!(c.engine().tone(WidgetId(0)), Tone::Highlight);
        assert_eq!(c.engine().tone(WidgetId(1)), Tone::Plain);
        assert_eq!(log.borrow().last(), Some(&Op::Invalidate));
    }

    #[test]
    fn test_transition_order() {
        let book = pasta_book();
        let log = Log::default();
        let (mut c, mut p) = started(&book, &log);
        let mark = log.borrow().len();

        let outcome = press(&mut c, &mut p, LogicalButton::Select);
        assert_eq!(
            outcome,
            Outcome::Moved {
                from: ScreenId::Home,
                to: ScreenId::RecipeList
            }
        );

        let stop = position(&log, mark, &Op::PollerStop);
        let destroy = position(&log, mark, &Op::DestroyScreen);
        let create = position(&log, mark, &Op::CreateScreen(ScreenKind::List));
        let start = position(&log, mark, &Op::PollerStart(ScreenId::RecipeList));
        let redraw = position(&log, mark, &Op::Invalidate);
        assert!(stop < destroy && destroy < create && create < start && start < redraw);
    }

    #[test]
    fn test_home_wraps_both_ways() {
        let book = pasta_book();
        let log = Log::default();
        let (mut c, mut p) = started(&book, &log);

        press(&mut c, &mut p, LogicalButton::Prev);
        assert_eq!(c.highlighted(), Some(2));
        assert_eq!(c.engine().tone(WidgetId(2)), Tone::Highlight);
        assert_eq!(c.engine().tone(WidgetId(0)), Tone::Plain);

        press(&mut c, &mut p, LogicalButton::Next);
        assert_eq!(c.highlighted(), Some(0));
    }

    #[test]
    fn test_back_semantics() {
        let book = pasta_book();
        let log = Log::default();
        let (mut c, mut p) = started(&book, &log);

        press(&mut c, &mut p, LogicalButton::Select); // Recipes
        press(&mut c, &mut p, LogicalButton::Select); // Pasta
        assert_eq!(c.active(), Some(ScreenId::RecipeInfo));
        assert_eq!(c.context().dish(), Some("Pasta"));

        // Highlight Steps, then Back still lands on the list
        press(&mut c, &mut p, LogicalButton::Next);
        press(&mut c, &mut p, LogicalButton::Back);
        assert_eq!(c.active(), Some(ScreenId::RecipeList));

        press(&mut c, &mut p, LogicalButton::Select);
        press(&mut c, &mut p, LogicalButton::Select); // Ingredients
        assert_eq!(c.active(), Some(ScreenId::Ingredients));
        press(&mut c, &mut p, LogicalButton::Back);
        assert_eq!(c.active(), Some(ScreenId::RecipeInfo));
    }

    #[test]
    fn test_pasta_ingredients_and_steps() {
        let book = pasta_book();
        let log = Log::default();
        let (mut c, mut p) = started(&book, &log);

        press(&mut c, &mut p, LogicalButton::Select);
        press(&mut c, &mut p, LogicalButton::Select);
        press(&mut c, &mut p, LogicalButton::Select);
        assert_eq!(c.active(), Some(ScreenId::Ingredients));

        let labels = labels_since_last_screen(&log);
        let texts: Vec<&str, 8> = labels.iter().map(|s| s.as_str()).collect();
        assert_eq!(texts.as_slice(), &["Pasta", "Spaghetti", "200 g", "Salt", "1 tsp"]);

        press(&mut c, &mut p, LogicalButton::Back);
        press(&mut c, &mut p, LogicalButton::Next);
        press(&mut c, &mut p, LogicalButton::Select);
        assert_eq!(c.active(), Some(ScreenId::Instructions));

        let labels = labels_since_last_screen(&log);
        let steps: Vec<&str, 8> = labels
            .iter()
            .map(|s| s.as_str())
            .filter(|s| s.as_bytes().first().is_some_and(u8::is_ascii_digit))
            .collect();
        assert_eq!(steps.as_slice(), &["1. Boil water", "2. Add pasta", "3. Drain"]);
    }

    #[test]
    fn test_protocol_fault_keeps_screen() {
        let book = pasta_book();
        let log = Log::default();
        let (mut c, mut p) = started(&book, &log);

        press(&mut c, &mut p, LogicalButton::Select);
        press(&mut c, &mut p, LogicalButton::Next); // Toast
        press(&mut c, &mut p, LogicalButton::Select);
        assert_eq!(c.context().dish(), Some("Toast"));

        let mark = log.borrow().len();
        let outcome = press(&mut c, &mut p, LogicalButton::Select);
        assert_eq!(
            outcome,
            Outcome::Faulted {
                target: ScreenId::Ingredients,
                error: ProtocolError::MissingIngredients
            }
        );
        assert_eq!(c.active(), Some(ScreenId::RecipeInfo));
        assert_eq!(c.fault(), Some(ProtocolError::MissingIngredients));
        assert_eq!(&log.borrow()[mark..], &[Op::Notice]);

        // UI stays live and the fault clears on the next transition
        press(&mut c, &mut p, LogicalButton::Back);
        assert_eq!(c.active(), Some(ScreenId::RecipeList));
        assert_eq!(c.fault(), None);
    }

    #[test]
    fn test_recipe_info_titled_with_dish() {
        let book = pasta_book();
        let log = Log::default();
        let (mut c, mut p) = started(&book, &log);
        press(&mut c, &mut p, LogicalButton::Select);
        press(&mut c, &mut p, LogicalButton::Select);

        let labels = labels_since_last_screen(&log);
        assert_eq!(labels.first().map(|s| s.as_str()), Some("Pasta"));
        assert_eq!(c.highlighted(), Some(0));
        // Title label comes first, so the highlighted button is widget 1
        assert_eq!(c.engine().tone(WidgetId(1)), Tone::Highlight);
        assert_eq!(c.engine().text(WidgetId(2)), Some("Steps"));
    }

    #[test]
    fn test_scroll_saturates() {
        let book = pasta_book();
        let log = Log::default();
        let (mut c, mut p) = started(&book, &log);
        press(&mut c, &mut p, LogicalButton::Select);
        press(&mut c, &mut p, LogicalButton::Select);
        press(&mut c, &mut p, LogicalButton::Next);
        press(&mut c, &mut p, LogicalButton::Select);
        assert_eq!(c.active(), Some(ScreenId::Instructions));

        press(&mut c, &mut p, LogicalButton::Prev);
        for _ in 0..4 {
            press(&mut c, &mut p, LogicalButton::Next);
        }
        assert_eq!(c.scroll_offset(), Some(60));
        assert_eq!(c.engine().scroll_y(ScreenHandle(0)), 60);

        let scrolls = log
            .borrow()
            .iter()
            .filter(|op| matches!(op, Op::ScrollBy(_)))
            .count();
        assert_eq!(scrolls, 3);
    }

    #[test]
    fn test_timer_ninety_seconds() {
        let book = pasta_book();
        let log = Log::default();
        let (mut c, mut p) = started(&book, &log);

        press(&mut c, &mut p, LogicalButton::Prev); // highlight Timer
        press(&mut c, &mut p, LogicalButton::Select);
        assert_eq!(c.active(), Some(ScreenId::Timer));

        for _ in 0..3 {
            press(&mut c, &mut p, LogicalButton::Prev);
        }
        assert_eq!(c.engine().text(WidgetId(0)), Some("01:30"));

        press(&mut c, &mut p, LogicalButton::Select);
        assert!(c.timer().is_running());
        assert_eq!(c.engine().text(WidgetId(2)), Some("Stop"));

        for _ in 0..90 {
            c.tick_timer().unwrap();
        }
        assert_eq!(c.engine().text(WidgetId(1)), Some("00:00"));
        assert_eq!(c.buzzer().activations, 1);

        for _ in 0..5 {
            assert_eq!(c.tick_timer().unwrap(), Tick::Idle);
        }
        assert_eq!(c.buzzer().activations, 1);
        assert_eq!(c.engine().text(WidgetId(2)), Some("Start"));

        // First press only silences the alarm
        assert_eq!(press(&mut c, &mut p, LogicalButton::Back), Outcome::Silenced);
        assert!(!c.buzzer().is_on());
        assert_eq!(c.active(), Some(ScreenId::Timer));
    }

    #[test]
    fn test_weight_only_on_scale() {
        let book = pasta_book();
        let log = Log::default();
        let (mut c, mut p) = started(&book, &log);

        c.show_weight(Ok(12.0)).unwrap();
        assert_eq!(c.engine().text(WidgetId(1)), Some("Scale"));

        press(&mut c, &mut p, LogicalButton::Next);
        press(&mut c, &mut p, LogicalButton::Select);
        assert_eq!(c.active(), Some(ScreenId::Scale));

        c.show_weight(Ok(152.46)).unwrap();
        assert_eq!(c.engine().text(WidgetId(1)), Some("152.5"));
    }

    #[test]
    fn test_empty_document_faults_on_recipes() {
        let book = RecipeBook::default();
        let log = Log::default();
        let (mut c, mut p) = started(&book, &log);

        let outcome = press(&mut c, &mut p, LogicalButton::Select);
        assert_eq!(
            outcome,
            Outcome::Faulted {
                target: ScreenId::RecipeList,
                error: ProtocolError::NoRecipes
            }
        );
        assert_eq!(c.active(), Some(ScreenId::Home));
    }
}

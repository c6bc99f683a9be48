//! UI state for the age gate and the game launcher.
//!
//! Keeping this module free of `web-sys` and `yew` lets the gate/launcher
//! behavior be unit-tested on the host; the components only translate DOM
//! events into the transitions defined here.

/// Query parameters appended to every embed URL so compatible games render
/// their embedded layout.
pub const EMBED_PARAMS: &str = "iframe=1&embedded=1";

/// How long the loading overlay lingers after the frame reports `load`,
/// masking flash-of-unstyled-content inside the embedded game.
pub const FRAME_SETTLE_MS: u32 = 1_000;

/// Delay between hiding the modal and clearing the frame source, so the
/// close transition finishes before the embed goes blank.
pub const FRAME_TEARDOWN_MS: u32 = 300;

/// Viewport width at which the burger menu gives way to the full nav bar.
pub const NAV_BREAKPOINT_PX: f64 = 768.0;

/// The persisted age-verification flag. Parsing anything but the stored
/// literal `"true"` yields `Unset`; the only transition is `grant()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Consent {
    #[default]
    Unset,
    Granted,
}

impl Consent {
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("true") => Consent::Granted,
            _ => Consent::Unset,
        }
    }

    pub fn grant(self) -> Self {
        Consent::Granted
    }

    pub fn is_granted(self) -> bool {
        self == Consent::Granted
    }

    /// Value to persist, or `None` while unset (the key is simply absent).
    pub fn stored_value(self) -> Option<&'static str> {
        match self {
            Consent::Granted => Some("true"),
            Consent::Unset => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    NeonReels,
    QuantumJackpot,
    CyberRoulette,
    ChromeBlackjack,
    DiamondRush,
    TurboDice,
}

impl GameKind {
    pub fn title(self) -> &'static str {
        match self {
            GameKind::NeonReels => "Neon Reels",
            GameKind::QuantumJackpot => "Quantum Jackpot",
            GameKind::CyberRoulette => "Cyber Roulette",
            GameKind::ChromeBlackjack => "Chrome Blackjack",
            GameKind::DiamondRush => "Diamond Rush",
            GameKind::TurboDice => "Turbo Dice",
        }
    }

    pub fn tagline(self) -> &'static str {
        match self {
            GameKind::NeonReels => "Five neon reels and ninety-six ways to light up the skyline.",
            GameKind::QuantumJackpot => "Stacked wilds collapse into one superposed mega-spin.",
            GameKind::CyberRoulette => "A chrome wheel, a plasma ball, and thirty-seven outcomes.",
            GameKind::ChromeBlackjack => "Classic twenty-one against a dealer with mirrored shades.",
            GameKind::DiamondRush => "Chain cascading gems before the grid powers down.",
            GameKind::TurboDice => "High-velocity dice rounds for short attention spans.",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            GameKind::NeonReels => "🎰",
            GameKind::QuantumJackpot => "⚡",
            GameKind::CyberRoulette => "🎡",
            GameKind::ChromeBlackjack => "🃏",
            GameKind::DiamondRush => "💎",
            GameKind::TurboDice => "🎲",
        }
    }

    /// Upstream play URL. Opaque to us beyond the embed-parameter append;
    /// some partners already route through a query string.
    pub fn play_url(self) -> &'static str {
        match self {
            GameKind::NeonReels => "https://play.spinforge.games/neon-reels",
            GameKind::QuantumJackpot => "https://play.spinforge.games/launch?game=quantum-jackpot",
            GameKind::CyberRoulette => "https://arcade.neonbyte.io/cyber-roulette",
            GameKind::ChromeBlackjack => "https://arcade.neonbyte.io/chrome-blackjack",
            GameKind::DiamondRush => "https://play.spinforge.games/diamond-rush",
            GameKind::TurboDice => "https://arcade.neonbyte.io/turbo-dice",
        }
    }

    pub fn all() -> &'static [GameKind] {
        &[
            GameKind::NeonReels,
            GameKind::QuantumJackpot,
            GameKind::CyberRoulette,
            GameKind::ChromeBlackjack,
            GameKind::DiamondRush,
            GameKind::TurboDice,
        ]
    }
}

/// Compose the address assigned to the embedded frame: the game URL plus
/// [`EMBED_PARAMS`], joined with `&` when the URL already has a query string.
pub fn embed_url(target: &str) -> String {
    let join = if target.contains('?') { '&' } else { '?' };
    format!("{}{}{}", target, join, EMBED_PARAMS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LauncherPhase {
    #[default]
    Closed,
    Loading,
    Ready,
    Failed,
}

/// Outcome of an open attempt. `Blocked` means the consent flag was unset;
/// the caller re-shows the gate and the frame stays untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    Opened,
    Blocked,
}

/// Launcher state machine: `Closed → Loading → Ready`, `Loading → Failed` on
/// an embed error, and `* → Closed` on close.
///
/// `epoch` increments on every successful open. Deferred work (the settle
/// delay and the frame teardown) carries the epoch it was scheduled under
/// and is ignored if the launcher has moved on, which is what makes a rapid
/// close-then-reopen safe.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Launcher {
    phase: LauncherPhase,
    game: Option<GameKind>,
    frame_src: Option<String>,
    epoch: u32,
}

impl Launcher {
    pub fn phase(&self) -> LauncherPhase {
        self.phase
    }

    pub fn game(&self) -> Option<GameKind> {
        self.game
    }

    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    pub fn is_open(&self) -> bool {
        self.phase != LauncherPhase::Closed
    }

    pub fn frame_src(&self) -> Option<&str> {
        self.frame_src.as_deref()
    }

    pub fn loading_visible(&self) -> bool {
        self.phase == LauncherPhase::Loading
    }

    pub fn error_visible(&self) -> bool {
        self.phase == LauncherPhase::Failed
    }

    /// The frame still holds a source after the modal was hidden; returns the
    /// epoch a teardown timer should be scheduled under.
    pub fn pending_teardown(&self) -> Option<u32> {
        if self.phase == LauncherPhase::Closed && self.frame_src.is_some() {
            Some(self.epoch)
        } else {
            None
        }
    }

    pub fn open(&mut self, consent: Consent, game: GameKind) -> OpenOutcome {
        if !consent.is_granted() {
            return OpenOutcome::Blocked;
        }
        self.epoch = self.epoch.wrapping_add(1);
        self.phase = LauncherPhase::Loading;
        self.game = Some(game);
        self.frame_src = Some(embed_url(game.play_url()));
        OpenOutcome::Opened
    }

    /// The settle delay after the frame's `load` event has elapsed.
    pub fn settle_elapsed(&mut self, epoch: u32) {
        if self.phase == LauncherPhase::Loading && epoch == self.epoch {
            self.phase = LauncherPhase::Ready;
        }
    }

    /// The frame reported an error while loading. Non-fatal: the loading
    /// overlay gives way to an inline notice.
    pub fn embed_failed(&mut self) {
        if self.phase == LauncherPhase::Loading {
            self.phase = LauncherPhase::Failed;
        }
    }

    /// Hide the modal. The frame source is left in place until
    /// [`Launcher::teardown_elapsed`] fires. No-op when already closed.
    pub fn close(&mut self) {
        if self.phase != LauncherPhase::Closed {
            self.phase = LauncherPhase::Closed;
        }
    }

    /// The deferred teardown fired. Clears the frame source only if the
    /// launcher is still closed under the same epoch; returns whether
    /// anything was cleared.
    pub fn teardown_elapsed(&mut self, epoch: u32) -> bool {
        if self.phase == LauncherPhase::Closed && epoch == self.epoch && self.frame_src.is_some() {
            self.frame_src = None;
            self.game = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consent_defaults_to_unset() {
        assert_eq!(Consent::default(), Consent::Unset);
        assert!(!Consent::from_stored(None).is_granted());
    }

    #[test]
    fn consent_parses_only_the_stored_literal() {
        assert!(Consent::from_stored(Some("true")).is_granted());
        assert!(!Consent::from_stored(Some("false")).is_granted());
        assert!(!Consent::from_stored(Some("1")).is_granted());
        assert!(!Consent::from_stored(Some("")).is_granted());
    }

    #[test]
    fn consent_grant_is_monotonic() {
        let granted = Consent::Unset.grant();
        assert!(granted.is_granted());
        assert!(granted.grant().is_granted());
        assert_eq!(granted.stored_value(), Some("true"));
        assert_eq!(Consent::Unset.stored_value(), None);
    }

    #[test]
    fn game_inventory_is_stable() {
        let all = GameKind::all();
        assert_eq!(all.len(), 6);

        let mut titles: Vec<&'static str> = all.iter().copied().map(GameKind::title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), 6);

        for g in all {
            assert!(!g.title().trim().is_empty());
            assert!(!g.tagline().trim().is_empty());
            assert!(!g.icon().trim().is_empty());
            assert!(g.play_url().starts_with("https://"));
        }
    }

    #[test]
    fn embed_url_joins_with_question_mark() {
        assert_eq!(
            embed_url("https://ex.com/g"),
            "https://ex.com/g?iframe=1&embedded=1"
        );
    }

    #[test]
    fn embed_url_joins_with_ampersand() {
        assert_eq!(
            embed_url("https://ex.com/g?x=1"),
            "https://ex.com/g?x=1&iframe=1&embedded=1"
        );
    }

    #[test]
    fn embed_url_appends_exactly_one_param_pair() {
        for g in GameKind::all() {
            let url = embed_url(g.play_url());
            assert_eq!(url.matches(EMBED_PARAMS).count(), 1, "{url}");
            assert_eq!(url.matches('?').count(), 1, "{url}");
        }
    }

    #[test]
    fn open_without_consent_leaves_frame_untouched() {
        let mut launcher = Launcher::default();
        let outcome = launcher.open(Consent::Unset, GameKind::NeonReels);
        assert_eq!(outcome, OpenOutcome::Blocked);
        assert_eq!(launcher.phase(), LauncherPhase::Closed);
        assert_eq!(launcher.frame_src(), None);
        assert_eq!(launcher.game(), None);
    }

    #[test]
    fn open_with_consent_enters_loading() {
        let mut launcher = Launcher::default();
        let outcome = launcher.open(Consent::Granted, GameKind::CyberRoulette);
        assert_eq!(outcome, OpenOutcome::Opened);
        assert_eq!(launcher.phase(), LauncherPhase::Loading);
        assert!(launcher.loading_visible());
        assert!(!launcher.error_visible());
        assert_eq!(
            launcher.frame_src(),
            Some("https://arcade.neonbyte.io/cyber-roulette?iframe=1&embedded=1")
        );
        assert_eq!(launcher.game(), Some(GameKind::CyberRoulette));
    }

    #[test]
    fn settle_hides_loading_overlay() {
        let mut launcher = Launcher::default();
        launcher.open(Consent::Granted, GameKind::NeonReels);
        let epoch = launcher.epoch();
        launcher.settle_elapsed(epoch);
        assert_eq!(launcher.phase(), LauncherPhase::Ready);
        assert!(!launcher.loading_visible());
        assert!(!launcher.error_visible());
    }

    #[test]
    fn stale_settle_is_ignored_after_reopen() {
        let mut launcher = Launcher::default();
        launcher.open(Consent::Granted, GameKind::NeonReels);
        let stale = launcher.epoch();
        launcher.close();
        launcher.open(Consent::Granted, GameKind::TurboDice);
        launcher.settle_elapsed(stale);
        assert_eq!(launcher.phase(), LauncherPhase::Loading);
    }

    #[test]
    fn embed_failure_swaps_overlay_for_error() {
        let mut launcher = Launcher::default();
        launcher.open(Consent::Granted, GameKind::DiamondRush);
        launcher.embed_failed();
        assert!(launcher.error_visible());
        assert!(!launcher.loading_visible());
        // A late load/settle no longer applies.
        let epoch = launcher.epoch();
        launcher.settle_elapsed(epoch);
        assert_eq!(launcher.phase(), LauncherPhase::Failed);
    }

    #[test]
    fn embed_failure_after_close_is_ignored() {
        let mut launcher = Launcher::default();
        launcher.open(Consent::Granted, GameKind::DiamondRush);
        launcher.close();
        launcher.embed_failed();
        assert_eq!(launcher.phase(), LauncherPhase::Closed);
    }

    #[test]
    fn close_is_idempotent() {
        let mut launcher = Launcher::default();
        launcher.open(Consent::Granted, GameKind::NeonReels);
        launcher.close();
        let after_first = launcher.clone();
        launcher.close();
        assert_eq!(launcher, after_first);
    }

    #[test]
    fn frame_survives_until_teardown_elapses() {
        let mut launcher = Launcher::default();
        launcher.open(Consent::Granted, GameKind::NeonReels);
        launcher.close();
        // Modal is hidden but the embed keeps its address until the timer.
        assert!(!launcher.is_open());
        assert!(launcher.frame_src().is_some());
        let epoch = launcher.pending_teardown().expect("teardown scheduled");
        assert!(launcher.teardown_elapsed(epoch));
        assert_eq!(launcher.frame_src(), None);
        assert_eq!(launcher.game(), None);
    }

    #[test]
    fn teardown_clears_frame_exactly_once() {
        let mut launcher = Launcher::default();
        launcher.open(Consent::Granted, GameKind::NeonReels);
        launcher.close();
        let epoch = launcher.epoch();
        assert!(launcher.teardown_elapsed(epoch));
        assert!(!launcher.teardown_elapsed(epoch));
        assert!(launcher.pending_teardown().is_none());
    }

    #[test]
    fn reopen_invalidates_pending_teardown() {
        let mut launcher = Launcher::default();
        launcher.open(Consent::Granted, GameKind::NeonReels);
        launcher.close();
        let stale = launcher.epoch();
        launcher.open(Consent::Granted, GameKind::ChromeBlackjack);
        assert!(!launcher.teardown_elapsed(stale));
        assert_eq!(
            launcher.frame_src(),
            Some("https://arcade.neonbyte.io/chrome-blackjack?iframe=1&embedded=1")
        );
    }

    #[test]
    fn fresh_session_flow_gates_then_launches() {
        // Fresh visit: nothing stored, the gate blocks the first open.
        let mut consent = Consent::from_stored(None);
        let mut launcher = Launcher::default();
        assert_eq!(
            launcher.open(consent, GameKind::QuantumJackpot),
            OpenOutcome::Blocked
        );
        assert_eq!(launcher.frame_src(), None);

        // The user confirms; the flag persists and the next open proceeds.
        consent = consent.grant();
        assert_eq!(consent.stored_value(), Some("true"));
        assert_eq!(
            launcher.open(consent, GameKind::QuantumJackpot),
            OpenOutcome::Opened
        );
        assert_eq!(
            launcher.frame_src(),
            Some("https://play.spinforge.games/launch?game=quantum-jackpot&iframe=1&embedded=1")
        );
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The bottom-sheet controller.

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Point, Rect, Vec2};
use smallvec::SmallVec;

use crate::animation::{Animation, AnimationId, RESIZE_DURATION};
use crate::arbitration::{Ownership, SheetHeights, arbitrate};
use crate::chrome::SheetChrome;
use crate::config::{Rgba, SheetConfig};
use crate::drag::{self, DragBounds, Release};
use crate::host::{LayoutUpdate, SheetHost};
use crate::keyboard::{self, KeyboardInfo};
use crate::pan::{InitialTouchPan, PanPhase, PanSample};
use crate::size::{ScreenMetrics, SheetSize, resolve_height};
use crate::snap::{DragDirection, SnapPoints};

/// Callback run around dismissal, with the sheet's state at that moment.
pub type DismissCallback = Box<dyn FnMut(&SheetState)>;

/// One-shot callback run after a dismissal finishes.
pub type Completion = Box<dyn FnOnce()>;

/// Where a sheet is in its presentation lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presentation {
    /// Constructed; nothing has been pushed to the host yet.
    Unloaded,
    /// Laid out off-screen below the view.
    Loaded,
    /// On screen.
    Presented,
    /// Sliding out or being torn down.
    Dismissing,
    /// Torn down.
    Dismissed,
}

/// Layout values the sheet last asked the host for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetLayout {
    /// Height constant of the container.
    pub container_height: f64,
    /// Vertical translation of the container.
    pub container_translation: f64,
    /// Offset of the container's bottom edge from the view's bottom edge.
    pub container_bottom_offset: f64,
    /// Overlay color.
    pub overlay: Rgba,
}

impl SheetLayout {
    fn merge(&mut self, update: &LayoutUpdate) {
        if let Some(height) = update.container_height {
            self.container_height = height;
        }
        if let Some(translation) = update.container_translation {
            self.container_translation = translation;
        }
        if let Some(offset) = update.container_bottom_offset {
            self.container_bottom_offset = offset;
        }
        if let Some(overlay) = update.overlay {
            self.overlay = overlay;
        }
    }
}

/// Sizing, gesture, and keyboard state of a sheet.
///
/// Committed and actual sizes are tracked separately: the committed size is
/// the snap point the sheet settled on, while the actual size is a snapshot of
/// the measured container height used as the stable baseline for a drag.
#[derive(Clone, Debug, PartialEq)]
pub struct SheetState {
    committed: SheetSize,
    actual: SheetSize,
    snap_points: SnapPoints,
    first_pan_point: Vec2,
    keyboard_height: f64,
    metrics: ScreenMetrics,
    layout: SheetLayout,
    presentation: Presentation,
}

impl SheetState {
    fn new(metrics: ScreenMetrics) -> Self {
        let committed = SheetSize::Fixed(300.0);
        Self {
            committed,
            actual: committed,
            snap_points: SnapPoints::default(),
            first_pan_point: Vec2::ZERO,
            keyboard_height: 0.0,
            metrics,
            layout: SheetLayout {
                container_height: committed.resolve(&metrics),
                container_translation: 0.0,
                container_bottom_offset: 0.0,
                overlay: Rgba::CLEAR,
            },
            presentation: Presentation::Unloaded,
        }
    }

    /// The snap point the sheet last settled on.
    #[must_use]
    pub fn committed_size(&self) -> SheetSize {
        self.committed
    }

    /// The last snapshot of the measured container height.
    #[must_use]
    pub fn actual_size(&self) -> SheetSize {
        self.actual
    }

    /// Configured snap points, smallest first.
    #[must_use]
    pub fn snap_points(&self) -> &SnapPoints {
        &self.snap_points
    }

    /// Translation recorded when the current drag began.
    #[must_use]
    pub fn first_pan_point(&self) -> Vec2 {
        self.first_pan_point
    }

    /// How much of the view the keyboard last covered.
    #[must_use]
    pub fn keyboard_height(&self) -> f64 {
        self.keyboard_height
    }

    /// Screen metrics used for size resolution.
    #[must_use]
    pub fn metrics(&self) -> &ScreenMetrics {
        &self.metrics
    }

    /// Layout values last pushed to the host.
    #[must_use]
    pub fn layout(&self) -> &SheetLayout {
        &self.layout
    }

    /// Lifecycle phase.
    #[must_use]
    pub fn presentation(&self) -> Presentation {
        self.presentation
    }

    /// Resolve `size` against the current metrics; `None` is zero.
    #[must_use]
    pub fn height(&self, size: Option<SheetSize>) -> f64 {
        resolve_height(size, &self.metrics)
    }
}

/// What to do once an animation reports completion.
enum AfterAnimation {
    Nothing,
    SnapshotActual,
    Dismiss,
}

/// A modal sheet anchored to the bottom of the screen.
///
/// The sheet owns its [`SheetHost`] and drives it in response to lifecycle
/// calls, pan samples, taps, and keyboard notifications forwarded by the host.
///
/// ```
/// # use kurbo::{Rect, Size, Insets, Vec2};
/// # use understory_bottom_sheet::*;
/// # #[derive(Default)]
/// # struct Host { height: f64 }
/// # impl SheetHost for Host {
/// #     fn metrics(&self) -> ScreenMetrics {
/// #         ScreenMetrics::new(Size::new(400.0, 800.0), Insets::new(0.0, 44.0, 0.0, 34.0))
/// #     }
/// #     fn measured_container_height(&self) -> f64 { self.height }
/// #     fn view_frame_in_window(&self) -> Rect { Rect::new(0.0, 0.0, 400.0, 800.0) }
/// #     fn apply(&mut self, update: &LayoutUpdate) {
/// #         if let Some(h) = update.container_height { self.height = h; }
/// #     }
/// #     fn animate(&mut self, _: AnimationId, _: Animation, update: &LayoutUpdate) {
/// #         self.apply(update);
/// #     }
/// #     fn apply_chrome(&mut self, _: &SheetChrome) {}
/// #     fn install_dismiss_recognizers(&mut self) {}
/// #     fn scroll_requires_sheet_pan_to_fail(&mut self) {}
/// #     fn teardown(&mut self) {}
/// # }
/// let mut sheet = BottomSheet::new(
///     Host::default(),
///     SheetConfig::default(),
///     [SheetSize::Fixed(600.0), SheetSize::Fixed(100.0), SheetSize::Fixed(300.0)],
/// );
/// sheet.load();
/// sheet.appear();
///
/// // Drag up by 150 points and let go.
/// sheet.handle_pan(PanSample::new(PanPhase::Began, Vec2::ZERO, Vec2::ZERO));
/// sheet.handle_pan(PanSample::new(PanPhase::Changed, Vec2::new(0.0, -150.0), Vec2::ZERO));
/// sheet.handle_pan(PanSample::new(PanPhase::Ended, Vec2::new(0.0, -150.0), Vec2::ZERO));
/// assert_eq!(sheet.state().committed_size(), SheetSize::Fixed(300.0));
/// ```
pub struct BottomSheet<H: SheetHost> {
    host: H,
    config: SheetConfig,
    state: SheetState,
    pan: Option<InitialTouchPan>,
    has_child_scroll: bool,
    next_animation: u64,
    pending: SmallVec<[(AnimationId, AfterAnimation); 4]>,
    teardown_completions: SmallVec<[Completion; 1]>,
    teardown_requested: bool,
    will_dismiss: Option<DismissCallback>,
    did_dismiss: Option<DismissCallback>,
}

impl<H: SheetHost + fmt::Debug> fmt::Debug for BottomSheet<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BottomSheet")
            .field("host", &self.host)
            .field("config", &self.config)
            .field("state", &self.state)
            .field("pan", &self.pan)
            .field("has_child_scroll", &self.has_child_scroll)
            .field("pending_animations", &self.pending.len())
            .finish_non_exhaustive()
    }
}

impl<H: SheetHost> BottomSheet<H> {
    /// Create a sheet over `host`.
    ///
    /// A non-empty `sizes` replaces the default snap points (`300` and
    /// full screen) and commits the smallest of them.
    pub fn new<I>(host: H, config: SheetConfig, sizes: I) -> Self
    where
        I: IntoIterator<Item = SheetSize>,
    {
        let metrics = host.metrics();
        let mut sheet = Self {
            host,
            config,
            state: SheetState::new(metrics),
            pan: None,
            has_child_scroll: false,
            next_animation: 0,
            pending: SmallVec::new(),
            teardown_completions: SmallVec::new(),
            teardown_requested: false,
            will_dismiss: None,
            did_dismiss: None,
        };
        sheet.set_sizes(sizes, false);
        sheet
    }

    /// The host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Sizing and lifecycle state.
    #[must_use]
    pub fn state(&self) -> &SheetState {
        &self.state
    }

    /// Current options.
    #[must_use]
    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    /// Options without side effects on change.
    ///
    /// Use the dedicated setters for the handle color, background extension,
    /// corner radius, and overlay color so the host is restyled.
    pub fn config_mut(&mut self) -> &mut SheetConfig {
        &mut self.config
    }

    /// Whether [`BottomSheet::load`] has run.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.state.presentation != Presentation::Unloaded
    }

    /// The pan recognizer state, present once a dismissable sheet is loaded.
    #[must_use]
    pub fn pan_recognizer(&self) -> Option<&InitialTouchPan> {
        self.pan.as_ref()
    }

    /// Run `callback` right before the sheet is torn down.
    pub fn set_will_dismiss(&mut self, callback: impl FnMut(&SheetState) + 'static) {
        self.will_dismiss = Some(Box::new(callback));
    }

    /// Run `callback` right after the sheet is torn down.
    pub fn set_did_dismiss(&mut self, callback: impl FnMut(&SheetState) + 'static) {
        self.did_dismiss = Some(Box::new(callback));
    }

    // --- Lifecycle ---

    /// Push the initial layout to the host and install recognizers.
    ///
    /// The container starts one screen height below its resting place with a
    /// clear overlay. Loading twice is a no-op.
    pub fn load(&mut self) {
        if self.is_loaded() {
            return;
        }
        self.state.metrics = self.host.metrics();
        self.state.presentation = Presentation::Loaded;

        let update = LayoutUpdate {
            container_height: Some(self.state.height(Some(self.state.committed))),
            container_translation: Some(self.state.metrics.screen.height),
            container_bottom_offset: Some(self.state.layout.container_bottom_offset),
            overlay: Some(Rgba::CLEAR),
        };
        self.apply(update);

        if self.config.dismissable {
            self.pan = Some(InitialTouchPan::new());
            self.host.install_dismiss_recognizers();
        }
        self.push_chrome();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            dismissable = self.config.dismissable,
            height = self.state.layout.container_height,
            "bottom sheet loaded"
        );
    }

    /// Slide the sheet in and fade the overlay up.
    ///
    /// Ignored once the sheet is dismissing or dismissed; a torn-down sheet
    /// is not presented again.
    pub fn appear(&mut self) {
        if self.is_leaving() {
            return;
        }
        self.load();
        self.state.presentation = Presentation::Presented;
        let update = LayoutUpdate {
            container_translation: Some(0.0),
            overlay: Some(self.config.overlay_color),
            ..LayoutUpdate::default()
        };
        self.animate(
            Animation::ease_out(self.config.animation_duration),
            update,
            AfterAnimation::Nothing,
        );
        self.snapshot_actual();
    }

    /// Refresh screen metrics after a rotation or safe-area change.
    ///
    /// Snap points keep their order; they are re-sorted on the next
    /// [`BottomSheet::set_sizes`].
    pub fn set_metrics(&mut self, metrics: ScreenMetrics) {
        self.state.metrics = metrics;
        if self.is_loaded() {
            self.push_chrome();
        }
    }

    /// Report that the animation `id` has finished or was interrupted.
    ///
    /// Unknown ids are ignored.
    pub fn animation_finished(&mut self, id: AnimationId) {
        let Some(index) = self.pending.iter().position(|(pending, _)| *pending == id) else {
            return;
        };
        let (_, after) = self.pending.remove(index);
        self.run_after(after);
    }

    // --- Sizing ---

    /// Replace the snap points and resize to the smallest.
    ///
    /// An empty `sizes` is ignored.
    pub fn set_sizes<I>(&mut self, sizes: I, animated: bool)
    where
        I: IntoIterator<Item = SheetSize>,
    {
        let Some(snap_points) = SnapPoints::new(sizes, &self.state.metrics) else {
            return;
        };
        let smallest = snap_points.first();
        self.state.snap_points = snap_points;

        #[cfg(feature = "tracing")]
        tracing::debug!(count = self.state.snap_points.len(), "snap points set");

        if let Some(smallest) = smallest {
            self.resize(smallest, animated);
        }
    }

    /// Commit `size` and move the container to it.
    pub fn resize(&mut self, size: SheetSize, animated: bool) {
        let update = LayoutUpdate {
            container_height: Some(self.state.height(Some(size))),
            ..LayoutUpdate::default()
        };
        if animated {
            self.animate(
                Animation::ease_out(RESIZE_DURATION),
                update,
                AfterAnimation::Nothing,
            );
        } else {
            self.apply(update);
        }
        self.state.committed = size;
        self.state.actual = size;
    }

    /// Resolve `size` against the current metrics; `None` is zero.
    #[must_use]
    pub fn height(&self, size: Option<SheetSize>) -> f64 {
        self.state.height(size)
    }

    // --- Gestures ---

    /// Record the first touch of a touch sequence, in the sheet view's space.
    pub fn touches_began(&mut self, location: Option<Point>) {
        if let Some(pan) = self.pan.as_mut() {
            pan.touches_began(location);
        }
    }

    /// Whether the sheet's recognizers should see a touch.
    ///
    /// Touches on interactive controls are left to the controls.
    #[must_use]
    pub fn should_receive_touch(&self, on_control: bool) -> bool {
        !on_control
    }

    /// Register the host's embedded scroll view for arbitration.
    ///
    /// Returns `false` if the sheet has no pan recognizer (not loaded yet, or
    /// not dismissable).
    pub fn handle_scroll_view(&mut self) -> bool {
        if self.pan.is_none() {
            return false;
        }
        self.host.scroll_requires_sheet_pan_to_fail();
        self.has_child_scroll = true;
        true
    }

    /// Whether the sheet's pan may begin, given its initial `velocity`.
    ///
    /// See [`crate::arbitration`] for the rules.
    pub fn gesture_should_begin(&mut self, velocity: Vec2) -> bool {
        let Some(touch) = self.pan.as_ref().and_then(InitialTouchPan::initial_touch_location)
        else {
            return true;
        };
        if !self.has_child_scroll {
            return true;
        }
        let Some(scroll) = self.host.child_scroll() else {
            return true;
        };

        let heights = SheetHeights {
            committed: self.state.height(Some(self.state.committed)),
            largest: self.state.height(self.state.snap_points.last()),
            full_screen: self.state.height(Some(SheetSize::FullScreen)),
        };
        let owner = arbitrate(touch, velocity, &scroll, heights);
        if owner == Ownership::SheetOutsideContent && self.state.keyboard_height > 0.0 {
            self.host.end_editing();
        }
        owner.sheet_begins()
    }

    /// Feed one pan callback.
    ///
    /// Ignored when the sheet has no pan recognizer or is already leaving.
    pub fn handle_pan(&mut self, sample: PanSample) {
        if self.pan.is_none() || self.is_leaving() {
            return;
        }
        let point = sample.translation;
        if sample.phase == PanPhase::Began {
            self.state.first_pan_point = point;
            self.snapshot_actual();
        }

        let baseline = self.state.height(Some(self.state.actual));
        let bounds = DragBounds::new(
            baseline,
            self.state.height(self.state.snap_points.first()),
            self.state.height(self.state.snap_points.last()),
        );
        let frame = drag::track(baseline, bounds, self.state.first_pan_point.y, point.y);

        match sample.phase {
            PanPhase::Cancelled | PanPhase::Failed => {
                let update = LayoutUpdate {
                    container_translation: Some(0.0),
                    container_height: Some(self.state.height(Some(self.state.committed))),
                    ..LayoutUpdate::default()
                };
                self.animate(
                    Animation::ease_out(self.config.animation_duration),
                    update,
                    AfterAnimation::Nothing,
                );
            }
            PanPhase::Ended => {
                let release = Release::project(frame, sample.velocity.y);
                if release.dismisses(bounds, self.config.dismiss_on_pan) {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(final_height = release.final_height, "pan dismissed sheet");

                    self.state.presentation = Presentation::Dismissing;
                    let update = LayoutUpdate {
                        container_translation: Some(self.host.measured_container_height()),
                        overlay: Some(Rgba::CLEAR),
                        ..LayoutUpdate::default()
                    };
                    self.animate(
                        Animation::ease_out(release.duration),
                        update,
                        AfterAnimation::Dismiss,
                    );
                    return;
                }

                let direction = DragDirection::from_translation(point.y);
                if let Some(size) = self.state.snap_points.settle(
                    release.final_height,
                    direction,
                    &self.state.metrics,
                ) {
                    self.state.committed = size;
                }

                #[cfg(feature = "tracing")]
                tracing::debug!(
                    final_height = release.final_height,
                    ?direction,
                    committed = ?self.state.committed,
                    "pan settled"
                );

                let update = LayoutUpdate {
                    container_translation: Some(0.0),
                    container_height: Some(self.state.height(Some(self.state.committed))),
                    ..LayoutUpdate::default()
                };
                self.animate(
                    Animation::ease_out(release.duration),
                    update,
                    AfterAnimation::SnapshotActual,
                );
            }
            PanPhase::Possible | PanPhase::Began | PanPhase::Changed => {
                let translation = if frame.overshoot > 0.0 && self.config.dismiss_on_pan {
                    frame.overshoot
                } else {
                    0.0
                };
                self.apply(LayoutUpdate {
                    container_height: Some(frame.height),
                    container_translation: Some(translation),
                    ..LayoutUpdate::default()
                });
            }
        }
    }

    /// Frame of the container in the sheet view's space, including any
    /// translation.
    #[must_use]
    pub fn container_frame(&self) -> Rect {
        let screen = self.state.metrics.screen;
        let layout = &self.state.layout;
        let bottom = screen.height + layout.container_bottom_offset;
        let top = (bottom - layout.container_height).max(self.state.metrics.min_container_top());
        Rect::new(0.0, top, screen.width, bottom) + Vec2::new(0.0, layout.container_translation)
    }

    /// Route a tap at `location` in the sheet view's space.
    ///
    /// Taps on the pull bar, and for dismissable sheets taps above the
    /// container, close the sheet when background taps dismiss. Returns whether
    /// the sheet started closing, which is never the case once it is leaving.
    pub fn handle_tap(&mut self, location: Point) -> bool {
        let container = self.container_frame();
        let pull_bar = Rect::new(
            container.x0,
            container.y0,
            container.x1,
            container.y0 + self.chrome().pull_bar_height,
        );
        let on_pull_bar = pull_bar.contains(location);
        let on_dismiss_area = self.pan.is_some() && location.y < container.y0;
        if on_pull_bar || on_dismiss_area {
            self.dismiss_tapped()
        } else {
            false
        }
    }

    /// A dismiss tap landed; close unless background taps are disabled or
    /// the sheet is already leaving.
    pub fn dismiss_tapped(&mut self) -> bool {
        if !self.config.dismiss_on_background_tap || self.is_leaving() {
            return false;
        }
        self.close_sheet(None);
        true
    }

    // --- Dismissal ---

    /// Slide the sheet off-screen, fade the overlay, then dismiss.
    ///
    /// `completion` runs after teardown, or at once if the sheet is already
    /// gone. A sheet that is already leaving is not closed again.
    pub fn close_sheet(&mut self, completion: Option<Completion>) {
        self.queue_completion(completion);
        if self.is_leaving() {
            return;
        }
        self.state.presentation = Presentation::Dismissing;
        let update = LayoutUpdate {
            container_translation: Some(self.host.measured_container_height()),
            overlay: Some(Rgba::CLEAR),
            ..LayoutUpdate::default()
        };
        self.animate(
            Animation::ease_in(self.config.animation_duration),
            update,
            AfterAnimation::Dismiss,
        );
    }

    /// Tear the sheet down without animating it out.
    ///
    /// Runs the will-dismiss callback, then asks the host to tear down. Hosts
    /// dismissing the sheet on their own should call this too so the callbacks
    /// fire.
    ///
    /// Teardown is requested once; later calls only queue their completion.
    pub fn dismiss(&mut self, completion: Option<Completion>) {
        self.queue_completion(completion);
        if self.teardown_requested || self.state.presentation == Presentation::Dismissed {
            return;
        }
        self.teardown_requested = true;

        #[cfg(feature = "tracing")]
        tracing::debug!("bottom sheet dismissing");

        if let Some(callback) = self.will_dismiss.as_mut() {
            callback(&self.state);
        }
        self.state.presentation = Presentation::Dismissing;
        self.host.teardown();
    }

    /// Report that the host finished tearing the sheet down.
    ///
    /// Runs the did-dismiss callback, then pending completions in order.
    /// Repeated reports are ignored.
    pub fn teardown_finished(&mut self) {
        if self.state.presentation == Presentation::Dismissed {
            return;
        }
        self.state.presentation = Presentation::Dismissed;
        if let Some(callback) = self.did_dismiss.as_mut() {
            callback(&self.state);
        }
        for completion in self.teardown_completions.drain(..) {
            completion();
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("bottom sheet dismissed");
    }

    // --- Keyboard ---

    /// The keyboard is about to change frame.
    ///
    /// Ignored without a payload or without an end frame.
    pub fn keyboard_will_change_frame(&mut self, info: Option<&KeyboardInfo>) {
        let Some(info) = info else {
            return;
        };
        let Some(end_frame) = info.end_frame else {
            return;
        };
        let height = keyboard::overlap_height(self.host.view_frame_in_window(), end_frame);
        self.adjust_for_keyboard(height, info);
    }

    /// The keyboard is about to hide.
    ///
    /// Ignored without a payload.
    pub fn keyboard_will_hide(&mut self, info: Option<&KeyboardInfo>) {
        if let Some(info) = info {
            self.adjust_for_keyboard(0.0, info);
        }
    }

    fn adjust_for_keyboard(&mut self, height: f64, info: &KeyboardInfo) {
        self.state.keyboard_height = height;
        let safe_area = self
            .config
            .adjust_for_bottom_safe_area
            .then(|| self.state.metrics.bottom_inset());
        let update = LayoutUpdate {
            container_bottom_offset: Some(keyboard::bottom_offset(height, safe_area)),
            ..LayoutUpdate::default()
        };
        self.animate(info.animation(), update, AfterAnimation::Nothing);
    }

    // --- Appearance ---

    /// Decorations for the current options and metrics.
    #[must_use]
    pub fn chrome(&self) -> SheetChrome {
        SheetChrome::new(
            &self.config,
            &self.state.metrics,
            self.host.content_background(),
        )
    }

    /// Set the handle color, restyling a loaded sheet.
    pub fn set_handle_color(&mut self, color: Rgba) {
        self.config.handle_color = color;
        if self.is_loaded() {
            self.push_chrome();
        }
    }

    /// Paint the content background behind the handle, restyling a loaded sheet.
    pub fn set_extend_background_behind_handle(&mut self, enabled: bool) {
        self.config.extend_background_behind_handle = enabled;
        if self.is_loaded() {
            self.push_chrome();
        }
    }

    /// Set the top corner radius, restyling a loaded sheet.
    pub fn set_top_corners_radius(&mut self, radius: f64) {
        self.config.top_corners_radius = radius;
        if self.is_loaded() {
            self.push_chrome();
        }
    }

    /// Set the overlay color, applying it at once while presented.
    pub fn set_overlay_color(&mut self, color: Rgba) {
        self.config.overlay_color = color;
        if self.state.presentation == Presentation::Presented {
            self.apply(LayoutUpdate {
                overlay: Some(color),
                ..LayoutUpdate::default()
            });
        }
    }

    // --- Internals ---

    fn is_leaving(&self) -> bool {
        matches!(
            self.state.presentation,
            Presentation::Dismissing | Presentation::Dismissed
        )
    }

    fn queue_completion(&mut self, completion: Option<Completion>) {
        let Some(completion) = completion else {
            return;
        };
        if self.state.presentation == Presentation::Dismissed {
            completion();
        } else {
            self.teardown_completions.push(completion);
        }
    }

    fn snapshot_actual(&mut self) {
        self.state.actual = SheetSize::Fixed(self.host.measured_container_height());
    }

    fn push_chrome(&mut self) {
        let chrome = self.chrome();
        self.host.apply_chrome(&chrome);
    }

    fn apply(&mut self, update: LayoutUpdate) {
        if update.is_empty() {
            return;
        }
        self.state.layout.merge(&update);
        if self.is_loaded() {
            self.host.apply(&update);
        }
    }

    fn animate(&mut self, animation: Animation, update: LayoutUpdate, after: AfterAnimation) {
        self.state.layout.merge(&update);
        if !self.is_loaded() {
            self.run_after(after);
            return;
        }
        let id = AnimationId(self.next_animation);
        self.next_animation += 1;
        self.pending.push((id, after));
        self.host.animate(id, animation, &update);
    }

    fn run_after(&mut self, after: AfterAnimation) {
        match after {
            AfterAnimation::Nothing => {}
            AfterAnimation::SnapshotActual => self.snapshot_actual(),
            AfterAnimation::Dismiss => self.dismiss(None),
        }
    }
}

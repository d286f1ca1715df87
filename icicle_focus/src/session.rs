// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The session: one tree, one focus state, one canvas.

use core::time::Duration;

use icicle_layout::{IciclePartition, PartitionLayout, Partitioner};
use icicle_tree::{DataLoadError, NodeId, RecordSource, Tree};

use crate::render::summarize;
use crate::{
    Breadcrumb, Canvas, ColorScheme, FocusState, Frame, IcicleConfig, LabelPolicy, NodeSummary,
    Transition,
};

/// An interactive icicle over one tree.
///
/// The partition is computed once. Every event runs to completion: the focus
/// state updates immediately, then the whole frame is recomputed from the new
/// focus and handed to the canvas. A canvas still animating the previous frame
/// is expected to retarget.
pub struct Session<C> {
    tree: Tree,
    layout: PartitionLayout,
    config: IcicleConfig,
    colors: ColorScheme,
    labels: LabelPolicy,
    state: FocusState,
    canvas: C,
}

impl<C: core::fmt::Debug> core::fmt::Debug for Session<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Session")
            .field("nodes", &self.tree.len())
            .field("focus", &self.state.focus())
            .field("breadcrumb", self.state.breadcrumb())
            .field("canvas", &self.canvas)
            .finish_non_exhaustive()
    }
}

impl<C: Canvas> Session<C> {
    /// Start a session with the standard partition, and render the initial frame.
    pub fn new(tree: Tree, config: IcicleConfig, canvas: C) -> Self {
        let partitioner = IciclePartition {
            parent_share: config.parent_share,
        };
        Self::with_partitioner(tree, config, &partitioner, canvas)
    }

    /// Start a session with a custom layout collaborator.
    pub fn with_partitioner<P>(tree: Tree, config: IcicleConfig, partitioner: &P, canvas: C) -> Self
    where
        P: Partitioner + ?Sized,
    {
        let layout = partitioner.partition(&tree, config.extent);
        let colors = ColorScheme::new(&tree, &config.palette, config.root_color);
        let labels = LabelPolicy::new(config.label, config.extent, tree.height());
        let state = FocusState::new(&tree);

        #[cfg(feature = "tracing")]
        tracing::info!(
            nodes = tree.len(),
            height = tree.height(),
            "icicle session started"
        );

        let mut session = Self {
            tree,
            layout,
            config,
            colors,
            labels,
            state,
            canvas,
        };
        session.render(Duration::ZERO);
        session
    }

    /// Load records, build the tree, and start a session.
    ///
    /// Any load or build failure is returned before anything is laid out or
    /// rendered.
    pub fn load<S>(source: &mut S, config: IcicleConfig, canvas: C) -> Result<Self, DataLoadError>
    where
        S: RecordSource + ?Sized,
    {
        let records = source.load()?;
        let tree = Tree::build(records).map_err(|err| {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %err, "records do not form a tree");
            DataLoadError::Malformed(err)
        })?;
        Ok(Self::new(tree, config, canvas))
    }

    /// Handle a click on `id`, re-rendering if it is a node of this tree.
    pub fn click(&mut self, id: NodeId) -> Option<Transition> {
        let transition = self.state.on_node_clicked(&self.tree, id)?;
        self.render(self.config.transition);
        Some(transition)
    }

    /// Handle a submitted search; a miss changes nothing and does not render.
    pub fn search(&mut self, query: &str) -> Option<Transition> {
        let transition =
            self.state
                .on_search_submitted(&self.tree, query, self.config.continuation)?;
        self.render(self.config.transition);
        Some(transition)
    }

    /// The frame for the current focus, with the configured transition duration.
    pub fn frame(&self) -> Frame<'_> {
        Frame::build(
            &self.tree,
            &self.layout,
            self.state.focus(),
            self.state.breadcrumb(),
            &self.colors,
            &self.labels,
            self.config.transition,
        )
    }

    fn render(&mut self, duration: Duration) {
        let frame = Frame::build(
            &self.tree,
            &self.layout,
            self.state.focus(),
            self.state.breadcrumb(),
            &self.colors,
            &self.labels,
            duration,
        );
        self.canvas.render(&frame);
    }
}

impl<C> Session<C> {
    /// The tree.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// The static partition.
    pub fn layout(&self) -> &PartitionLayout {
        &self.layout
    }

    /// The configuration.
    pub fn config(&self) -> &IcicleConfig {
        &self.config
    }

    /// The focus state.
    pub fn state(&self) -> &FocusState {
        &self.state
    }

    /// The focused node.
    pub fn focus(&self) -> NodeId {
        self.state.focus()
    }

    /// Names from the root to the focus.
    pub fn breadcrumb(&self) -> &Breadcrumb {
        self.state.breadcrumb()
    }

    /// Tooltip facts for `id`.
    pub fn summary(&self, id: NodeId) -> Option<NodeSummary<'_>> {
        summarize(&self.tree, id)
    }

    /// The canvas.
    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// The canvas, mutably.
    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    /// End the session and return the canvas.
    pub fn into_canvas(self) -> C {
        self.canvas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Direction, LabelOpacity, Palette};
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;
    use icicle_layout::{Extent, ParentShare};
    use icicle_tree::{MalformedTreeError, Record};
    use kurbo::Rect;

    /// Copies out the parts of each frame the tests look at.
    #[derive(Debug, Default)]
    struct Recorder {
        frames: Vec<Recorded>,
    }

    #[derive(Debug)]
    struct Recorded {
        breadcrumb: String,
        duration: Duration,
        rects: Vec<Rect>,
        fills: Vec<Color>,
        visible: Vec<bool>,
    }

    impl Canvas for Recorder {
        fn render(&mut self, frame: &Frame<'_>) {
            self.frames.push(Recorded {
                breadcrumb: frame.breadcrumb_text(),
                duration: frame.duration,
                rects: frame.items.iter().map(|i| i.rect.0).collect(),
                fills: frame.items.iter().map(|i| i.fill).collect(),
                visible: frame
                    .items
                    .iter()
                    .map(|i| i.label_opacity.is_visible())
                    .collect(),
            });
        }
    }

    fn records() -> Vec<Record> {
        vec![
            Record::root("0", "root").with_products(10),
            Record::child("1", "0", "Dogs").with_products(7),
            Record::child("2", "1", "Leashes").with_products(7),
            Record::child("3", "0", "Cats").with_products(3),
        ]
    }

    fn config() -> IcicleConfig {
        IcicleConfig {
            extent: Extent::new(300.0, 90.0),
            ..IcicleConfig::default()
        }
    }

    fn session() -> Session<Recorder> {
        Session::load(&mut records(), config(), Recorder::default()).unwrap()
    }

    #[test]
    fn initial_frame_is_rendered_immediately() {
        let s = session();
        let frames = &s.canvas().frames;
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].breadcrumb, "root");
        assert_eq!(frames[0].duration, Duration::ZERO);
        assert_eq!(frames[0].rects[0], Rect::new(0.0, 0.0, 90.0, 100.0));
    }

    #[test]
    fn scenario_click_in_and_out() {
        let mut s = session();
        let dogs = s.tree().find("1").unwrap();

        let t = s.click(dogs).unwrap();
        assert_eq!(t.direction, Direction::Down);
        assert_eq!(s.breadcrumb().segments(), ["root", "Dogs"]);

        let t = s.click(dogs).unwrap();
        assert_eq!(t.focus, s.tree().root());
        assert_eq!(s.breadcrumb().segments(), ["root"]);

        let frames = &s.canvas().frames;
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[1].breadcrumb, "root>Dogs");
        assert_eq!(frames[1].duration, Duration::from_millis(750));
        // Zoomed on Dogs, Dogs spans the full breadth and Cats is pushed off.
        assert_eq!(frames[1].rects[dogs.index()], Rect::new(0.0, 0.0, 90.0, 100.0));
        assert_eq!(frames[2].rects, frames[0].rects);
    }

    #[test]
    fn colors_do_not_depend_on_focus() {
        let mut s = session();
        let leashes = s.tree().find("2").unwrap();
        let cats = s.tree().find("3").unwrap();
        s.click(leashes);
        s.click(cats);

        let frames = &s.canvas().frames;
        for frame in frames {
            assert_eq!(frame.fills, frames[0].fills);
        }
        let dogs = s.tree().find("1").unwrap();
        assert_eq!(frames[0].fills[leashes.index()], frames[0].fills[dogs.index()]);
        assert_eq!(frames[0].fills[0], Color::NEUTRAL);
        assert_eq!(frames[0].fills[cats.index()], Palette::ACCENT[1]);
    }

    #[test]
    fn labels_follow_displayed_breadth() {
        let mut s = session();
        // Cats is 30 wide at the root focus: wider than 15.
        let cats = s.tree().find("3").unwrap();
        assert!(s.canvas().frames[0].visible[cats.index()]);

        // Zoomed into Dogs, Cats is still 45 wide, just off-canvas.
        s.click(s.tree().find("1").unwrap());
        let frame = s.frame();
        let item = frame.item(cats).unwrap();
        assert_eq!(item.label_opacity, LabelOpacity::Visible);
        assert!(item.rect.0.x0 >= 90.0);
    }

    #[test]
    fn search_focuses_matches_and_misses_silently() {
        let mut s = session();
        let t = s.search("EASH").unwrap();
        assert_eq!(t.focus, s.tree().find("2").unwrap());
        assert_eq!(s.breadcrumb().to_string(), "root>Dogs>Leashes");
        assert_eq!(s.canvas().frames.len(), 2);

        assert!(s.search("eash").is_none());
        assert!(s.search("parrots").is_none());
        assert_eq!(s.canvas().frames.len(), 2);
        assert_eq!(s.focus(), s.tree().find("2").unwrap());
    }

    #[test]
    fn accessors_expose_layout_state_and_canvas() {
        let mut s = session();
        assert_eq!(s.layout().len(), s.tree().len());
        assert_eq!(s.layout().extent(), s.config().extent);
        assert_eq!(s.config().transition, Duration::from_millis(750));

        s.search("cats");
        assert_eq!(s.state().focus(), s.tree().find("3").unwrap());
        assert_eq!(s.state().search().query(), "cats");

        s.canvas_mut().frames.clear();
        s.click(s.tree().root());
        let recorder = s.into_canvas();
        assert_eq!(recorder.frames.len(), 1);
        assert_eq!(recorder.frames[0].breadcrumb, "root");
    }

    #[test]
    fn summaries_report_subcategories_and_products() {
        let s = session();
        let dogs = s.tree().find("1").unwrap();
        let summary = s.summary(dogs).unwrap();
        assert_eq!(summary.name, "Dogs");
        assert_eq!(summary.subcategories, 1);
        assert_eq!(summary.products, Some(7));
        assert_eq!(s.frame().item(dogs).unwrap().summary, summary);
    }

    #[test]
    fn malformed_records_fail_before_rendering() {
        let mut rendered = 0;
        let Err(err) = Session::load(
            &mut vec![Record::root("0", "a"), Record::root("1", "b")],
            IcicleConfig::default(),
            |_: &Frame<'_>| rendered += 1,
        ) else {
            panic!("two roots must not load");
        };
        assert!(matches!(
            err,
            DataLoadError::Malformed(MalformedTreeError::MultipleRoots { .. })
        ));
        assert_eq!(rendered, 0);
    }

    #[test]
    fn unavailable_source_is_reported() {
        struct Offline;
        impl RecordSource for Offline {
            fn load(&mut self) -> Result<Vec<Record>, DataLoadError> {
                Err(DataLoadError::Unavailable("connection refused".into()))
            }
        }
        let Err(err) = Session::load(&mut Offline, IcicleConfig::default(), |_: &Frame<'_>| {})
        else {
            panic!("an offline source must not load");
        };
        assert_eq!(err, DataLoadError::Unavailable("connection refused".into()));
    }

    #[test]
    fn reserve_share_reaches_the_canvas() {
        let cfg = IcicleConfig {
            parent_share: ParentShare::Reserve,
            ..config()
        };
        let s = Session::new(Tree::build(records()).unwrap(), cfg, Recorder::default());
        let cats = s.tree().find("3").unwrap();
        assert_eq!(s.canvas().frames[0].rects[cats.index()].x1, 67.5);
    }

    #[test]
    fn custom_partitioner_with_missing_rects_stays_total() {
        struct Stub;
        impl Partitioner for Stub {
            fn partition(&self, _: &Tree, extent: Extent) -> PartitionLayout {
                PartitionLayout::from_rects(vec![Rect::new(0.0, 0.0, 90.0, 10.0)], extent)
            }
        }
        let mut s = Session::with_partitioner(
            Tree::build(records()).unwrap(),
            config(),
            &Stub,
            Recorder::default(),
        );
        s.click(s.tree().find("3").unwrap());
        let frames = &s.canvas().frames;
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1].rects.len(), s.tree().len());
        assert_eq!(
            frames[1].rects,
            [Rect::new(0.0, 0.0, 90.0, 10.0), Rect::ZERO, Rect::ZERO, Rect::ZERO]
        );
        assert_eq!(frames[1].visible[1..], [false, false, false]);
    }
}

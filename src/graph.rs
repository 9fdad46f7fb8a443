//! The processing graph - fixed topology, live node parameters.
//!
//! Built exactly once per [`Player`](crate::Player) and never rebuilt. The
//! petgraph edges record the wiring the engine follows; mutation operations
//! only touch node weights. Topology, in order:
//!
//! ```text
//! Source → Analyser → Band(31 Hz) → … → Band(16 kHz)
//!     ├─→ ConvolverSourceGain ─────────────→ Compressor   (dry)
//!     └─→ Convolver → ConvolverReturnGain ─→ Compressor   (wet)
//! Compressor → Panner → MasterGain → Destination
//! ```

use itertools::Itertools;
use petgraph::graph::{Graph, NodeIndex};
use tracing::{debug, trace};

use crate::eq::{BandFreq, EqPreset};
use crate::nodes::{
    Analyser, Compressor, Convolver, Destination, Gain, PannerNode, PeakingFilter,
};
use crate::reverb::ImpulseResponse;

/// Weight of one graph node.
pub(crate) enum GraphNode {
    /// Tap point for the media element's signal.
    Source,
    Analyser(Analyser),
    Band(PeakingFilter),
    Gain(Gain),
    Convolver(Convolver),
    Compressor(Compressor),
    Panner(PannerNode),
    Destination(Destination),
}

type Topology = Graph<GraphNode, ()>;

/// The wired processing graph.
///
/// Indices are assigned at construction and stable for the graph's lifetime,
/// so repeated accessor calls always resolve to the same nodes.
pub struct AudioGraph {
    graph: Topology,
    #[allow(dead_code)]
    source: NodeIndex,
    analyser: NodeIndex,
    bands: [NodeIndex; 10],
    convolver: NodeIndex,
    convolver_source_gain: NodeIndex,
    convolver_return_gain: NodeIndex,
    compressor: NodeIndex,
    panner: NodeIndex,
    master_gain: NodeIndex,
    destination: NodeIndex,
}

impl AudioGraph {
    /// Construct and wire the full topology.
    pub(crate) fn build() -> Self {
        let mut graph = Topology::with_capacity(18, 19);

        let source = graph.add_node(GraphNode::Source);
        let analyser = graph.add_node(GraphNode::Analyser(Analyser::new()));
        graph.add_edge(source, analyser, ());

        // Band chain in ascending frequency order, analyser feeding the first.
        let mut bands = [source; 10];
        for (slot, band) in bands.iter_mut().zip(BandFreq::ALL.iter()) {
            *slot = graph.add_node(GraphNode::Band(PeakingFilter::new(*band)));
        }
        graph.add_edge(analyser, bands[0], ());
        for (a, b) in bands.iter().tuple_windows() {
            graph.add_edge(*a, *b, ());
        }

        // Send/return split after the last band: the source gain carries the
        // dry signal, the convolver feeds the return gain with the wet one.
        let convolver = graph.add_node(GraphNode::Convolver(Convolver::new()));
        let convolver_source_gain = graph.add_node(GraphNode::Gain(Gain::unity()));
        let convolver_return_gain = graph.add_node(GraphNode::Gain(Gain::new(0.0)));
        let compressor = graph.add_node(GraphNode::Compressor(Compressor::new()));
        let last_band = bands[bands.len() - 1];
        graph.add_edge(last_band, convolver_source_gain, ());
        graph.add_edge(last_band, convolver, ());
        graph.add_edge(convolver, convolver_return_gain, ());
        graph.add_edge(convolver_source_gain, compressor, ());
        graph.add_edge(convolver_return_gain, compressor, ());

        let panner = graph.add_node(GraphNode::Panner(PannerNode::new()));
        let master_gain = graph.add_node(GraphNode::Gain(Gain::unity()));
        let destination = graph.add_node(GraphNode::Destination(Destination::new()));
        graph.add_edge(compressor, panner, ());
        graph.add_edge(panner, master_gain, ());
        graph.add_edge(master_gain, destination, ());

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "audio graph built"
        );

        Self {
            graph,
            source,
            analyser,
            bands,
            convolver,
            convolver_source_gain,
            convolver_return_gain,
            compressor,
            panner,
            master_gain,
            destination,
        }
    }

    // --- equalizer ---

    /// Set one band's gain in dB.
    pub fn set_band_gain(&mut self, band: BandFreq, db: f32) {
        self.band_filter_mut(band).set_gain_db(db);
        trace!(hz = band.hertz(), db, "band gain");
    }

    /// Current gain of one band in dB.
    pub fn band_gain(&self, band: BandFreq) -> f32 {
        self.band_filter(band).gain_db()
    }

    /// Apply all ten gains of a preset. Bands are independent parameters, so
    /// iteration order does not matter.
    pub fn apply_preset(&mut self, preset: &EqPreset) {
        debug!(preset = preset.name, "applying equalizer preset");
        for band in BandFreq::ALL.iter() {
            self.set_band_gain(*band, preset.gain(*band));
        }
    }

    // --- convolution reverb ---

    /// Replace the active impulse response.
    ///
    /// With a buffer, the passed gains take effect. Without one the stage is
    /// forced transparent: source gain 1, return gain 0, whatever was passed.
    pub fn load_impulse(
        &mut self,
        buffer: Option<ImpulseResponse>,
        source_gain: f32,
        return_gain: f32,
    ) {
        let loaded = buffer.is_some();
        self.convolver_mut().set_buffer(buffer);
        if loaded {
            self.set_reverb_source_gain(source_gain);
            self.set_reverb_return_gain(return_gain);
        } else {
            self.set_reverb_source_gain(1.0);
            self.set_reverb_return_gain(0.0);
        }
        debug!(loaded, "impulse response swapped");
    }

    pub fn has_impulse(&self) -> bool {
        self.convolver().has_buffer()
    }

    /// Dry-send gain. Writing the current value again is skipped.
    pub fn set_reverb_source_gain(&mut self, gain: f32) {
        let idx = self.convolver_source_gain;
        if self.gain_at(idx).gain() == gain {
            return;
        }
        self.gain_at_mut(idx).set_gain(gain);
        trace!(gain, "reverb source gain");
    }

    /// Wet-return gain. Writing the current value again is skipped.
    pub fn set_reverb_return_gain(&mut self, gain: f32) {
        let idx = self.convolver_return_gain;
        if self.gain_at(idx).gain() == gain {
            return;
        }
        self.gain_at_mut(idx).set_gain(gain);
        trace!(gain, "reverb return gain");
    }

    pub fn reverb_source_gain(&self) -> f32 {
        self.gain_at(self.convolver_source_gain).gain()
    }

    pub fn reverb_return_gain(&self) -> f32 {
        self.gain_at(self.convolver_return_gain).gain()
    }

    // --- panner ---

    pub fn set_panner_position(&mut self, x: f32, y: f32, z: f32) {
        self.panner_mut().set_position(x, y, z);
    }

    pub fn panner_position(&self) -> (f32, f32, f32) {
        self.panner_node().position()
    }

    // --- gain staging / taps ---

    pub fn set_master_gain(&mut self, gain: f32) {
        let idx = self.master_gain;
        self.gain_at_mut(idx).set_gain(gain);
        trace!(gain, "master gain");
    }

    pub fn master_gain(&self) -> f32 {
        self.gain_at(self.master_gain).gain()
    }

    pub fn analyser(&self) -> &Analyser {
        match &self.graph[self.analyser] {
            GraphNode::Analyser(a) => a,
            _ => unreachable!("analyser index points at a non-analyser node"),
        }
    }

    pub fn compressor(&self) -> &Compressor {
        match &self.graph[self.compressor] {
            GraphNode::Compressor(c) => c,
            _ => unreachable!("compressor index points at a non-compressor node"),
        }
    }

    pub fn destination(&self) -> &Destination {
        match &self.graph[self.destination] {
            GraphNode::Destination(d) => d,
            _ => unreachable!("destination index points at a non-destination node"),
        }
    }

    pub(crate) fn destination_mut(&mut self) -> &mut Destination {
        match &mut self.graph[self.destination] {
            GraphNode::Destination(d) => d,
            _ => unreachable!("destination index points at a non-destination node"),
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    // --- typed access helpers ---

    fn band_filter(&self, band: BandFreq) -> &PeakingFilter {
        match &self.graph[self.bands[band.index()]] {
            GraphNode::Band(f) => f,
            _ => unreachable!("band index points at a non-filter node"),
        }
    }

    fn band_filter_mut(&mut self, band: BandFreq) -> &mut PeakingFilter {
        match &mut self.graph[self.bands[band.index()]] {
            GraphNode::Band(f) => f,
            _ => unreachable!("band index points at a non-filter node"),
        }
    }

    fn gain_at(&self, idx: NodeIndex) -> &Gain {
        match &self.graph[idx] {
            GraphNode::Gain(g) => g,
            _ => unreachable!("expected a gain node"),
        }
    }

    fn gain_at_mut(&mut self, idx: NodeIndex) -> &mut Gain {
        match &mut self.graph[idx] {
            GraphNode::Gain(g) => g,
            _ => unreachable!("expected a gain node"),
        }
    }

    fn convolver(&self) -> &Convolver {
        match &self.graph[self.convolver] {
            GraphNode::Convolver(c) => c,
            _ => unreachable!("convolver index points at a non-convolver node"),
        }
    }

    fn convolver_mut(&mut self) -> &mut Convolver {
        match &mut self.graph[self.convolver] {
            GraphNode::Convolver(c) => c,
            _ => unreachable!("convolver index points at a non-convolver node"),
        }
    }

    fn panner_node(&self) -> &PannerNode {
        match &self.graph[self.panner] {
            GraphNode::Panner(p) => p,
            _ => unreachable!("panner index points at a non-panner node"),
        }
    }

    fn panner_mut(&mut self) -> &mut PannerNode {
        match &mut self.graph[self.panner] {
            GraphNode::Panner(p) => p,
            _ => unreachable!("panner index points at a non-panner node"),
        }
    }
}

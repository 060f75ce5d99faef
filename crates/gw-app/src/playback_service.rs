//! BFS playback for frontends.

use std::time::Duration;

use gw_anim::{Pacer, Renderer, Step, StepPlayer, ThreadPacer, generate_bfs_steps};
use gw_graph::Graph;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::project_service::LoadedGraph;
use crate::query::ensure_start;

/// Pick the start node: the explicit one, else the project's, else the
/// first node of the graph.
pub fn resolve_start(loaded: &LoadedGraph, explicit: Option<&str>) -> AppResult<String> {
    let start = explicit
        .map(str::to_string)
        .or_else(|| loaded.playback.start.clone())
        .or_else(|| loaded.graph.nodes().first().cloned())
        .ok_or(AppError::EmptyGraph)?;
    ensure_start(&loaded.graph, &start)?;
    Ok(start)
}

/// Player loaded with the BFS steps from `start`.
pub fn prepare_player(graph: &Graph, start: &str) -> AppResult<StepPlayer> {
    ensure_start(graph, start)?;
    let steps = generate_bfs_steps(graph, start);
    info!(start, steps = steps.len(), "bfs steps generated");
    Ok(StepPlayer::with_steps(steps))
}

/// One JSON object per step, in order.
pub fn steps_as_json(steps: &[Step]) -> AppResult<Vec<String>> {
    steps
        .iter()
        .map(|step| serde_json::to_string(step).map_err(AppError::from))
        .collect()
}

/// Play in real time, sleeping `period` before each step.
///
/// `limit` caps how many steps are rendered; the player is left paused at
/// that point. Returns the number of steps rendered.
pub fn play<R: Renderer + ?Sized>(
    player: &mut StepPlayer,
    renderer: &mut R,
    period: Duration,
    limit: Option<usize>,
) -> usize {
    play_with(player, renderer, period, limit, &mut ThreadPacer)
}

/// [`play`] with a caller-supplied pacer.
pub fn play_with<R, P>(
    player: &mut StepPlayer,
    renderer: &mut R,
    period: Duration,
    limit: Option<usize>,
    pacer: &mut P,
) -> usize
where
    R: Renderer + ?Sized,
    P: Pacer + ?Sized,
{
    let mut ticks = 0usize;
    let mut limited = |period: Duration| {
        if limit.is_some_and(|max| ticks >= max) {
            return false;
        }
        ticks += 1;
        pacer.wait(period)
    };

    player.start(period);
    let rendered = player.run(renderer, &mut limited);
    info!(
        rendered,
        index = player.index(),
        finished = player.is_finished(),
        "playback stopped"
    );
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use gw_anim::Frame;

    fn no_wait(_: Duration) -> bool {
        true
    }

    #[test]
    fn resolve_start_prefers_explicit() {
        let mut loaded = LoadedGraph::sample();
        assert_eq!(resolve_start(&loaded, Some("D")).unwrap(), "D");
        assert_eq!(resolve_start(&loaded, None).unwrap(), "A");

        loaded.playback.start = Some("E".into());
        assert_eq!(resolve_start(&loaded, None).unwrap(), "E");
        assert!(resolve_start(&loaded, Some("nope")).is_err());
    }

    #[test]
    fn resolve_start_on_empty_graph() {
        let mut loaded = LoadedGraph::sample();
        loaded.graph = Graph::new(false);
        assert!(matches!(
            resolve_start(&loaded, None),
            Err(AppError::EmptyGraph)
        ));
    }

    #[test]
    fn steps_serialize_with_type_tag() {
        let player = prepare_player(&gw_graph::sample_graph(), "A").unwrap();
        let lines = steps_as_json(player.steps()).unwrap();
        assert_eq!(lines[0], r#"{"type":"enqueue","node":"A","queue":["A"]}"#);
        assert_eq!(lines.last().unwrap(), r#"{"type":"end"}"#);
    }

    #[test]
    fn play_with_limit_pauses() {
        let mut player = prepare_player(&gw_graph::sample_graph(), "A").unwrap();
        let mut frame = Frame::new();

        let rendered = play_with(
            &mut player,
            &mut frame,
            Duration::ZERO,
            Some(4),
            &mut no_wait,
        );
        assert_eq!(rendered, 4);
        assert!(!player.is_playing());
        assert_eq!(frame.applied(), 4);

        let rest = play_with(&mut player, &mut frame, Duration::ZERO, None, &mut no_wait);
        assert_eq!(rendered + rest, player.steps().len());
        assert!(frame.is_finished());
    }
}

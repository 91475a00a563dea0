//! The play run: load the newest dungeon and drive the read-eval loop.

use std::path::Path;

use delve_clock::{ClockConfig, ClockService, LocalTime};
use delve_engine::{Outcome, Summary, TraversalEngine};
use delve_format::{DungeonReader, FormatConfig};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::DelveError;

/// Loads the newest run directory under `root`, checks it has exactly one
/// start and one end room, then starts the clock publisher.
///
/// The clock is only started once the dungeon is known to be playable,
/// so a failed load leaves no background task behind.
pub async fn start_play(
    root: &Path,
    format_config: &FormatConfig,
    clock_config: ClockConfig,
) -> Result<TraversalEngine, DelveError> {
    let (dir, graph) = DungeonReader::new(format_config.clone()).load_latest(root)?;
    let engine = TraversalEngine::new(graph)?;
    info!(dir = %dir.display(), "dungeon loaded");

    let clock = ClockService::start(clock_config, LocalTime).await;
    Ok(engine.with_clock(clock))
}

/// Runs the game until the end room is reached or input runs out.
///
/// Each turn writes the prompt, reads one line and executes it with the
/// trailing newline removed. Unknown rooms and clock hiccups are reported
/// inline and the loop carries on. On a win the summary is written and
/// returned. The engine's clock, if any, is shut down either way.
///
/// # Errors
/// - [`DelveError::InputClosed`] if `reader` hits EOF first
/// - [`DelveError::Io`] if reading or writing fails
/// - [`DelveError::Engine`] for errors the loop can't recover from
pub async fn run_session<R, W>(
    mut engine: TraversalEngine,
    mut reader: R,
    mut writer: W,
) -> Result<Summary, DelveError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let result = play_turns(&mut engine, &mut reader, &mut writer).await;
    if let Some(clock) = engine.take_clock() {
        clock.shutdown().await;
    }
    let summary = result?;

    writer.write_all(summary.to_string().as_bytes()).await?;
    writer.flush().await?;
    Ok(summary)
}

async fn play_turns<R, W>(
    engine: &mut TraversalEngine,
    reader: &mut R,
    writer: &mut W,
) -> Result<Summary, DelveError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut line = String::new();
    loop {
        writer.write_all(engine.prompt().to_string().as_bytes()).await?;
        writer.flush().await?;

        line.clear();
        if reader.read_line(&mut line).await? == 0 {
            info!(steps = engine.player().visited_count(), "input closed mid-game");
            return Err(DelveError::InputClosed);
        }
        let command = line.trim_end_matches(['\n', '\r']);

        let reply = match engine.execute(command).await {
            Ok(Outcome::Time(time)) => format!("\n{time}\n\n"),
            Ok(Outcome::Moved { .. }) => "\n".to_string(),
            Ok(Outcome::Won { .. }) => {
                writer.write_all(b"\n").await?;
                return Ok(engine.summary());
            }
            Err(e) if e.is_recoverable() => {
                debug!(command, error = %e, "command rejected");
                format!("\n{e}\n\n")
            }
            Err(e) => return Err(e.into()),
        };
        writer.write_all(reply.as_bytes()).await?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use delve_graph::{DungeonGraph, RoomType};

    /// START -- HALL -- END.
    fn hallway() -> TraversalEngine {
        let mut g = DungeonGraph::new();
        let start = g.add_room("START", Some(RoomType::Start));
        let hall = g.add_room("HALL", Some(RoomType::Mid));
        let end = g.add_room("END", Some(RoomType::End));
        g.connect(start, hall).unwrap();
        g.connect(hall, end).unwrap();
        TraversalEngine::new(g).unwrap()
    }

    async fn play(input: &str) -> (Result<Summary, DelveError>, String) {
        let mut out = Vec::new();
        let result = run_session(hallway(), input.as_bytes(), &mut out).await;
        (result, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_session_to_win() {
        let (result, out) = play("HALL\nEND\n").await;
        let summary = result.unwrap();
        assert_eq!(summary.steps, 2);
        assert_eq!(
            out,
            "CURRENT LOCATION: START\nPOSSIBLE CONNECTIONS: HALL.\nWHERE TO? >\n\
             CURRENT LOCATION: HALL\nPOSSIBLE CONNECTIONS: START, END.\nWHERE TO? >\n\
             YOU HAVE FOUND THE END ROOM. CONGRATULATIONS!\n\
             YOU TOOK 2 STEPS. YOUR PATH TO VICTORY WAS:\n\
             HALL\nEND\n"
        );
    }

    #[tokio::test]
    async fn test_unknown_room_reprompts() {
        let (result, out) = play("CELLAR\nHALL\nEND\n").await;
        assert_eq!(result.unwrap().steps, 2);
        assert!(out.contains(
            "WHERE TO? >\nHUH? I DON'T UNDERSTAND THAT ROOM. TRY AGAIN.\n\n\
             CURRENT LOCATION: START\n"
        ));
    }

    #[tokio::test]
    async fn test_crlf_input_is_accepted() {
        let (result, _) = play("HALL\r\nEND\r\n").await;
        assert_eq!(result.unwrap().path, vec!["HALL", "END"]);
    }

    #[tokio::test]
    async fn test_eof_before_win() {
        let (result, out) = play("HALL\n").await;
        assert!(matches!(result, Err(DelveError::InputClosed)));
        assert!(out.ends_with("CURRENT LOCATION: HALL\nPOSSIBLE CONNECTIONS: START, END.\nWHERE TO? >"));
        assert!(!out.contains("CONGRATULATIONS"));
    }

    #[tokio::test]
    async fn test_time_without_clock_is_reported_inline() {
        let (result, out) = play("time\nHALL\nEND\n").await;
        assert_eq!(result.unwrap().steps, 2);
        assert!(out.contains("\nthe clock is not running\n\n"));
    }
}

use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use std::str::FromStr;
use std::time::Duration;

use board::Board;
use chess::ChessMove;
use thiserror::Error;

use crate::Agent;

const DEFAULT_MOVE_TIME_MS: u64 = 100;

#[derive(Debug, Error)]
pub enum UciError {
    #[error("failed to start engine {path}: {source}")]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("engine did not expose its {0} pipe")]
    MissingPipe(&'static str),
    #[error("engine I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("engine closed its output while waiting for `{0}`")]
    Closed(&'static str),
    #[error("engine answered with an unreadable move: {0}")]
    BadMove(String),
}

/// An external engine speaking UCI over its standard streams.
///
/// Every failure while asking for a move is logged and reported as no move,
/// which forfeits the game.
pub struct UciAgent {
    name: String,
    child: Child,
    stdin: BufWriter<ChildStdin>,
    stdout: BufReader<ChildStdout>,
    move_time_ms: u64,
}

impl UciAgent {
    pub fn new(path: &Path) -> Result<Self, UciError> {
        Self::with_options(path, DEFAULT_MOVE_TIME_MS, &[])
    }

    /// Starts the engine, applies `setoption` pairs and waits until it is ready.
    pub fn with_options(
        path: &Path,
        move_time_ms: u64,
        options: &[(&str, &str)],
    ) -> Result<Self, UciError> {
        let mut child = Command::new(path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| UciError::Spawn {
                path: path.to_path_buf(),
                source,
            })?;

        let stdin = child.stdin.take().ok_or(UciError::MissingPipe("stdin"))?;
        let stdout = child.stdout.take().ok_or(UciError::MissingPipe("stdout"))?;

        let fallback_name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "UCI".to_string());

        let mut agent = Self {
            name: fallback_name,
            child,
            stdin: BufWriter::new(stdin),
            stdout: BufReader::new(stdout),
            move_time_ms,
        };

        agent.send_command("uci")?;
        let mut engine_name = None;
        agent.read_until("uciok", |line| {
            if let Some(name) = line.strip_prefix("id name ") {
                engine_name = Some(name.trim().to_string());
            }
        })?;
        if let Some(name) = engine_name {
            agent.name = name;
        }

        for (name, value) in options {
            agent.send_command(&format!("setoption name {} value {}", name, value))?;
        }
        agent.send_command("isready")?;
        agent.read_until("readyok", |_| {})?;

        log::debug!("Started UCI engine {}", agent.name);
        Ok(agent)
    }

    #[inline]
    fn send_command(&mut self, command: &str) -> Result<(), UciError> {
        writeln!(self.stdin, "{}", command)?;
        self.stdin.flush()?;
        Ok(())
    }

    /// Reads lines until one starts with `token`, returning that line.
    fn read_until(
        &mut self,
        token: &'static str,
        mut on_line: impl FnMut(&str),
    ) -> Result<String, UciError> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.stdout.read_line(&mut line)? == 0 {
                return Err(UciError::Closed(token));
            }

            let trimmed = line.trim();
            if trimmed.starts_with(token) {
                return Ok(trimmed.to_string());
            }
            on_line(trimmed);
        }
    }

    fn request_move(&mut self, fen: &str) -> Result<ChessMove, UciError> {
        self.send_command(&format!("position fen {}", fen))?;
        self.send_command(&format!("go movetime {}", self.move_time_ms))?;

        let line = self.read_until("bestmove", |_| {})?;
        let txt = line.split_whitespace().nth(1).unwrap_or_default();
        ChessMove::from_str(txt).map_err(|_| UciError::BadMove(txt.to_string()))
    }
}

impl<B: Board> Agent<B> for UciAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn make_move(&mut self, board: &mut B) -> Option<ChessMove> {
        match self.request_move(&board.fen()) {
            Ok(mv) => Some(mv),
            Err(e) => {
                log::warn!("{}: {}", self.name, e);
                None
            }
        }
    }
}

impl Drop for UciAgent {
    fn drop(&mut self) {
        if self.send_command("quit").is_err() {
            let _ = self.child.kill();
            let _ = self.child.wait();
            return;
        }

        // Give the engine a moment to quit gracefully
        std::thread::sleep(Duration::from_millis(100));

        match self.child.try_wait() {
            Ok(Some(_)) => {}
            _ => {
                let _ = self.child.kill();
                let _ = self.child.wait();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_engine_fails_to_spawn() {
        let result = UciAgent::new(Path::new("/nonexistent/engine-binary"));
        assert!(matches!(result, Err(UciError::Spawn { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_scripted_engine_move() {
        use board::GameBoard;
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("engine.sh");
        std::fs::write(
            &script,
            "#!/bin/sh\n\
             while read -r cmd rest; do\n\
               case \"$cmd\" in\n\
                 uci) echo 'id name Scripted'; echo 'uciok' ;;\n\
                 isready) echo 'readyok' ;;\n\
                 go) echo 'info depth 1'; echo 'bestmove e2e4 ponder e7e5' ;;\n\
                 quit) exit 0 ;;\n\
               esac\n\
             done\n",
        )
        .unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let mut agent = UciAgent::new(&script).unwrap();
        let mut board = GameBoard::default();
        assert_eq!(Agent::<GameBoard>::name(&agent), "Scripted");
        assert_eq!(
            agent.make_move(&mut board),
            Some(ChessMove::from_str("e2e4").unwrap())
        );

        drop(agent);
    }
}

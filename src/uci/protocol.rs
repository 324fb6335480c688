use crate::core::board::{Board, Color};
use crate::core::moves::Move;
use crate::engine::eval::score_moves;
use crate::engine::history::HistoryTable;
use crate::engine::movegen::{perft, MoveGen};
use crate::engine::search::{RandomTieBreaker, Searcher};
use log::{debug, warn};
use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};
use vampirc_uci::uci::{UciSearchControl, UciTimeControl};
use vampirc_uci::{parser, UciMessage};

/// Host session: tracks the game from `position` commands and answers `go`.
pub struct UCI {
    board: Board,
    side: Color,
    /// Moves played to reach `board`, oldest first.
    moves: Vec<Move>,
    /// (position, move) pairs this engine has played this game.
    history: HistoryTable,
    searcher: Searcher,
}

/// Clock and depth settings of one `go` command.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GoLimits {
    pub remaining: Option<Duration>,
    pub movetime: Option<Duration>,
    pub depth: Option<u32>,
}

impl UCI {
    pub fn new() -> Self {
        Self::with_searcher(Searcher::new())
    }

    pub fn with_searcher(searcher: Searcher) -> Self {
        UCI {
            board: Board::startpos(),
            side: Color::White,
            moves: Vec::new(),
            history: HistoryTable::new(),
            searcher,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side(&self) -> Color {
        self.side
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn history(&self) -> &HistoryTable {
        &self.history
    }

    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }

    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        for line in stdin.lock().lines() {
            let line = line?;
            if !self.handle_line(&line, &mut stdout)? {
                break;
            }
            stdout.flush()?;
        }
        Ok(())
    }

    /// Process one input line. Returns `false` on `quit`.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<bool> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(true);
        }

        match parser::parse_one(line) {
            UciMessage::Uci => self.cmd_uci(out)?,
            UciMessage::IsReady => writeln!(out, "readyok")?,
            UciMessage::SetOption { name, value } => {
                self.apply_setoption(name.trim(), value.as_deref());
            }
            UciMessage::UciNewGame => self.cmd_ucinewgame(),
            UciMessage::Position { startpos, fen, moves } => {
                let fen_str = fen.as_ref().map(|f| f.as_str());
                let move_strs: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
                let refs: Vec<&str> = move_strs.iter().map(String::as_str).collect();
                self.apply_position(startpos, fen_str, &refs);
            }
            UciMessage::Go { time_control, search_control } => {
                let limits = go_to_limits(self.side, time_control.as_ref(), search_control.as_ref());
                self.do_go(limits, out)?;
            }
            UciMessage::Stop => debug!("stop ignored: a running search always completes"),
            UciMessage::Quit => return Ok(false),
            UciMessage::Unknown(ref s, _) => {
                let parts: Vec<&str> = s.split_whitespace().collect();
                match parts.first().copied() {
                    Some("d") | Some("display") => self.cmd_display(out)?,
                    Some("eval") => self.cmd_eval(out)?,
                    Some("perft") => self.cmd_perft(&parts, out)?,
                    _ => debug!("ignoring '{}'", line),
                }
            }
            _ => {}
        }
        Ok(true)
    }

    fn cmd_uci<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let limits = self.searcher.limits();
        writeln!(out, "id name chess_agent {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(out, "id author chess_agent developers")?;
        writeln!(out)?;
        writeln!(
            out,
            "option name GameTime type spin default {} min 1 max 86400",
            limits.game_time.as_secs()
        )?;
        writeln!(
            out,
            "option name MaxDepth type spin default {} min 1 max 100",
            limits.max_depth
        )?;
        writeln!(out, "option name Seed type string default")?;
        writeln!(out, "uciok")
    }

    fn apply_setoption(&mut self, name: &str, value: Option<&str>) {
        let opt = name.to_lowercase().replace([' ', '_'], "");
        let value = value.unwrap_or("").trim();
        match opt.as_str() {
            "gametime" => match value.parse::<u64>() {
                Ok(secs) => self.searcher.limits_mut().game_time = Duration::from_secs(secs),
                Err(_) => warn!("invalid GameTime '{}'", value),
            },
            "maxdepth" => match value.parse::<u32>() {
                Ok(depth) => self.searcher.limits_mut().max_depth = depth.clamp(1, 100),
                Err(_) => warn!("invalid MaxDepth '{}'", value),
            },
            "seed" => {
                let tie_breaker = match value.parse::<u64>() {
                    Ok(seed) => RandomTieBreaker::seeded(seed),
                    Err(_) => RandomTieBreaker::new(),
                };
                self.searcher.set_tie_breaker(tie_breaker);
            }
            _ => warn!("unknown option '{}'", name),
        }
    }

    pub fn cmd_ucinewgame(&mut self) {
        self.board = Board::startpos();
        self.side = Color::White;
        self.moves.clear();
        self.history.clear();
    }

    /// Rebuild the game from a start position and the moves played since.
    ///
    /// Moves are trusted: they are applied without a legality check, so castling
    /// played by the opponent goes through `Board::apply`.
    fn apply_position(&mut self, startpos: bool, fen: Option<&str>, move_strs: &[&str]) {
        if startpos {
            self.board = Board::startpos();
            self.side = Color::White;
        } else if let Some(fen_str) = fen {
            match Board::from_fen(fen_str) {
                Ok((board, side)) => {
                    self.board = board;
                    self.side = side;
                }
                Err(e) => {
                    warn!("rejected position '{}': {}, falling back to startpos", fen_str, e);
                    self.board = Board::startpos();
                    self.side = Color::White;
                    self.moves.clear();
                    return;
                }
            }
        }
        self.moves.clear();

        for &s in move_strs {
            match Move::from_uci(s) {
                Ok(mv) => {
                    self.board = self.board.apply(mv, self.side);
                    self.side = !self.side;
                    self.moves.push(mv);
                }
                Err(e) => {
                    warn!("stopped replaying moves at '{}': {}", s, e);
                    break;
                }
            }
        }
    }

    /// Search the current position and print `bestmove`.
    fn do_go<W: Write>(&mut self, go: GoLimits, out: &mut W) -> io::Result<()> {
        let saved = self.searcher.limits().clone();
        if let Some(depth) = go.depth {
            // `go depth N` searches target depths 0 through N
            self.searcher.limits_mut().max_depth = depth.saturating_add(1);
        }
        if go.movetime.is_some() {
            self.searcher.limits_mut().movetime = go.movetime;
        }

        let remaining = go.remaining.unwrap_or(saved.game_time);
        let chosen = self
            .searcher
            .choose_move(&self.board, self.side, remaining, &self.moves);
        *self.searcher.limits_mut() = saved;

        let stats = self.searcher.stats();
        writeln!(
            out,
            "info depth {} score cp {} nodes {} time {}",
            stats.depth.unwrap_or(0),
            stats.score,
            stats.nodes,
            stats.elapsed.as_millis()
        )?;

        match chosen {
            Some(mv) => {
                let seen = self.history.record(&self.board, mv);
                debug!("{} played from this position {} time(s)", mv, seen);
                writeln!(out, "bestmove {}", mv)
            }
            None => writeln!(out, "bestmove 0000"),
        }
    }

    fn cmd_display<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{:?}", self.board)?;
        writeln!(out, "  FEN: {}", self.board.to_fen(self.side))
    }

    fn cmd_eval<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let moves = MoveGen::legal_moves(&self.board, self.side);
        let scored = score_moves(&self.board, &moves);
        for (score, bucket) in scored.buckets().iter().rev() {
            let list: Vec<String> = bucket.iter().map(|m| m.to_uci()).collect();
            writeln!(out, "capture {}: {}", score, list.join(" "))?;
        }
        Ok(())
    }

    fn cmd_perft<W: Write>(&self, parts: &[&str], out: &mut W) -> io::Result<()> {
        let depth: u32 = parts.get(1).and_then(|s| s.parse().ok()).unwrap_or(1);
        let start = Instant::now();
        let nodes = perft(&self.board, self.side, depth);
        let elapsed = start.elapsed();
        let nps = if elapsed.as_millis() > 0 {
            nodes as u128 * 1000 / elapsed.as_millis()
        } else {
            0
        };
        writeln!(out, "Nodes: {} ({} ms, {} nps)", nodes, elapsed.as_millis(), nps)
    }
}

/// Translate a parsed `go` command into the clock of the side to move.
pub fn go_to_limits(
    side: Color,
    time_control: Option<&UciTimeControl>,
    search_control: Option<&UciSearchControl>,
) -> GoLimits {
    let mut limits = GoLimits::default();

    if let Some(sc) = search_control {
        limits.depth = sc.depth.map(u32::from);
    }

    if let Some(tc) = time_control {
        match tc {
            UciTimeControl::MoveTime(d) => limits.movetime = Some(to_std_duration(d)),
            UciTimeControl::TimeLeft {
                white_time,
                black_time,
                ..
            } => {
                let clock = match side {
                    Color::White => white_time,
                    Color::Black => black_time,
                };
                limits.remaining = clock.as_ref().map(to_std_duration);
            }
            _ => {}
        }
    }

    limits
}

/// Negative clocks count as no time left.
fn to_std_duration(d: &chrono::Duration) -> Duration {
    d.to_std().unwrap_or(Duration::ZERO)
}

impl Default for UCI {
    fn default() -> Self {
        Self::new()
    }
}

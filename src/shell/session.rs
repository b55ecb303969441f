//! Command-at-a-time interactive session

use super::command::{Command, HELP_TEXT};
use super::config::ShellConfig;
use crate::model::VideoCatalog;
use crate::player::{self, Report, VideoPlayer, SELECTION_PROMPT};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

pub const GREETING: &str = "Hello and welcome to the video player, what would you like to do?";
pub const FAREWELL: &str =
    "Video player has now terminated its execution. Thank you and goodbye!";

/// Whether the session keeps reading after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Reads commands from `input`, runs them on the player and writes the
/// outcome to `output`
pub struct Session<C: VideoCatalog, R: BufRead, W: Write> {
    player: VideoPlayer<C>,
    input: R,
    output: W,
    prompt: String,
}

impl<C: VideoCatalog, R: BufRead, W: Write> Session<C, R, W> {
    pub fn new(player: VideoPlayer<C>, input: R, output: W, config: &ShellConfig) -> Self {
        Self {
            player,
            input,
            output,
            prompt: config.prompt.clone(),
        }
    }

    pub fn player(&self) -> &VideoPlayer<C> {
        &self.player
    }

    /// Run until `EXIT` or end of input
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "{}", GREETING)?;

        loop {
            write!(self.output, "{}", self.prompt)?;
            self.output.flush()?;

            let Some(line) = self.read_line().context("Failed to read command")? else {
                log::debug!("End of input");
                break;
            };

            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    log::debug!("Rejected input {:?}: {:?}", line.trim(), e);
                    writeln!(self.output, "{}", e)?;
                    continue;
                }
            };

            if self.execute(command)? == Flow::Exit {
                break;
            }
        }

        writeln!(self.output, "{}", FAREWELL)?;
        self.output.flush()?;
        Ok(())
    }

    /// Run one command and print its outcome
    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        log::debug!("Executing {:?}", command);

        let outcome = match command {
            Command::NumberOfVideos => Ok(self.player.number_of_videos()),
            Command::ShowAllVideos => Ok(self.player.show_all_videos()),
            Command::Play(video_id) => self.player.play(&video_id),
            Command::PlayRandom => self.player.play_random(),
            Command::Stop => self.player.stop(),
            Command::Pause => self.player.pause(),
            Command::Continue => self.player.resume(),
            Command::ShowPlaying => Ok(self.player.show_playing()),
            Command::CreatePlaylist(name) => self.player.create_playlist(&name),
            Command::AddToPlaylist { playlist, video_id } => {
                self.player.add_to_playlist(&playlist, &video_id)
            }
            Command::RemoveFromPlaylist { playlist, video_id } => {
                self.player.remove_from_playlist(&playlist, &video_id)
            }
            Command::ClearPlaylist(name) => self.player.clear_playlist(&name),
            Command::DeletePlaylist(name) => self.player.delete_playlist(&name),
            Command::ShowPlaylist(name) => self.player.show_playlist(&name),
            Command::ShowAllPlaylists => Ok(self.player.show_all_playlists()),
            Command::SearchVideos(term) => {
                self.search(&term)?;
                return Ok(Flow::Continue);
            }
            Command::SearchVideosWithTag(tag) => self.player.search_videos_with_tag(&tag),
            Command::FlagVideo { video_id, reason } => {
                self.player.flag_video(&video_id, reason.as_deref())
            }
            Command::AllowVideo(video_id) => self.player.allow_video(&video_id),
            Command::Help => Ok(Report::line(HELP_TEXT)),
            Command::Exit => return Ok(Flow::Exit),
        };

        self.emit(outcome)?;
        Ok(Flow::Continue)
    }

    /// List matches, then read one answer and play it if it names a result
    fn search(&mut self, term: &str) -> Result<()> {
        let results = self.player.search_videos(term);
        self.emit(Ok(results.report()))?;
        if results.is_empty() {
            return Ok(());
        }

        for line in SELECTION_PROMPT {
            writeln!(self.output, "{}", line)?;
        }
        self.output.flush()?;

        let answer = match self.read_line() {
            Ok(answer) => answer.unwrap_or_default(),
            Err(e) => {
                log::debug!("Could not read search selection: {}", e);
                String::new()
            }
        };

        let outcome = self.player.play_selection(&results, &answer);
        self.emit(outcome)
    }

    fn emit(&mut self, outcome: player::Result<Report>) -> Result<()> {
        match outcome {
            Ok(report) => {
                for line in report.lines() {
                    writeln!(self.output, "{}", line)?;
                }
            }
            Err(e) => {
                log::debug!("Command rejected: {:?}", e);
                writeln!(self.output, "{}", e)?;
            }
        }
        Ok(())
    }

    /// One line without its terminator, or None at end of input
    ///
    /// Invalid UTF-8 is replaced rather than rejected, so a garbled line
    /// reaches the parser like any other unknown command.
    fn read_line(&mut self) -> std::io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

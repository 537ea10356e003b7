use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Instant;

use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

use school_directory::app::ticker::SecondTicker;
use school_directory::app::{AppError, DetailScreen, RankingBoard, SearchScreen};
use school_directory::config::AppConfig;
use school_directory::domain::entity::EntityId;
use school_directory::platform::{
    CommentSource, EntitySource, InMemoryComments, InMemoryVoteLedger, JsonDataset,
    StaticEntities, VoteSubmitter,
};

const HELP: &str = "\
commands:
  search <text>      filter the directory
  fav <id>           toggle a favorite
  list               show the directory
  detail <id>        open a school
  review <1-5> <txt> review the open school
  board              show the ranking board
  find <text>        filter the board
  more               load the whole board
  vote <id>          tap a board row
  confirm | cancel   answer the vote prompt
  ok                 close the remaining-time prompt
  tick <secs>        advance the cooldown clock
  status             show the cooldown
  quit";

fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = AppConfig::load(config_path.as_deref())?;
    info!(?config, "configuration loaded");

    let entities = match &config.dataset_path {
        Some(path) => JsonDataset::new(path).load_entities()?,
        None => StaticEntities::ranking_board().load_entities()?,
    };

    let mut search = SearchScreen::new(entities.clone());
    let mut board = RankingBoard::new(
        entities.clone(),
        &config,
        InMemoryVoteLedger::from_entities(&entities),
    );
    let mut comments = InMemoryComments::new();
    let mut detail: Option<DetailScreen> = None;
    let mut ticker = SecondTicker::new(Instant::now());

    println!("{HELP}");
    let input = spawn_input();
    let interval = config.tick_interval();
    loop {
        let line = match input.recv_timeout(interval) {
            Ok(Ok(line)) => line,
            Ok(Err(e)) => {
                error!("Failed to read input: {e}");
                break;
            }
            Err(RecvTimeoutError::Timeout) => {
                board.tick(ticker.advance(Instant::now()));
                continue;
            }
            Err(RecvTimeoutError::Disconnected) => break,
        };
        board.tick(ticker.advance(Instant::now()));

        let (command, arg) = match line.trim().split_once(' ') {
            Some((command, arg)) => (command, arg.trim()),
            None => (line.trim(), ""),
        };

        let outcome = match command {
            "" => Ok(()),
            "quit" | "exit" => break,
            "search" => {
                search.handle_search(arg);
                print_directory(&search);
                Ok(())
            }
            "fav" => {
                let favorite = search.toggle_favorite(&EntityId::new(arg));
                println!("{arg}: {}", if favorite { "favorite" } else { "not favorite" });
                Ok(())
            }
            "list" => {
                print_directory(&search);
                Ok(())
            }
            "detail" => search.open_detail(&EntityId::new(arg)).map(|screen| {
                print_detail(&screen, &comments);
                detail = Some(screen);
            }),
            "review" => review(detail.as_mut(), arg, &mut comments),
            "board" => {
                print_board(&board);
                Ok(())
            }
            "find" => {
                board.handle_search(arg);
                print_board(&board);
                Ok(())
            }
            "more" => {
                board.load_more();
                print_board(&board);
                Ok(())
            }
            "vote" => board.tap(&EntityId::new(arg)).map(|_| print_prompt(&board)),
            "confirm" => board.confirm().map(|receipt| {
                println!("vote recorded, {} now has {} votes", receipt.id, receipt.vote_count)
            }),
            "cancel" => {
                board.cancel();
                Ok(())
            }
            "ok" => {
                board.dismiss_notice();
                Ok(())
            }
            "tick" => {
                match arg.parse::<i64>() {
                    Ok(secs) => board.tick(secs),
                    Err(_) => println!("tick expects a number of seconds"),
                }
                Ok(())
            }
            "status" => {
                let cooldown = board.cooldown();
                if cooldown.can_vote {
                    println!("you can vote");
                } else {
                    println!("next vote in {}", cooldown.remaining);
                }
                Ok(())
            }
            _ => {
                println!("{HELP}");
                Ok(())
            }
        };

        if let Err(e) = outcome {
            println!("error: {e}");
        }
        if let Err(e) = io::stdout().flush() {
            error!("Failed to flush output: {e}");
        }
    }

    Ok(())
}

/// Reads stdin on its own thread so the main loop can keep ticking
fn spawn_input() -> Receiver<io::Result<String>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

fn review(
    detail: Option<&mut DetailScreen>,
    arg: &str,
    comments: &mut InMemoryComments,
) -> Result<(), AppError> {
    let Some(detail) = detail else {
        println!("open a school with `detail <id>` first");
        return Ok(());
    };

    let (stars, text) = arg.split_once(' ').unwrap_or((arg, ""));
    let stars = match stars.parse::<u8>() {
        Ok(stars) => stars,
        Err(_) => {
            println!("review expects a star count");
            return Ok(());
        }
    };

    detail.open_review();
    detail.rate(stars)?;
    detail.write_comment(text)?;
    let review = detail.submit_review()?;
    comments.add_review(&detail.entity().id, review);
    print_detail(detail, &*comments);
    Ok(())
}

fn print_directory(search: &SearchScreen) {
    for row in search.rows() {
        println!("[{}] {row}", row.id);
    }
}

fn print_board<V: VoteSubmitter>(board: &RankingBoard<V>) {
    for row in board.rows() {
        println!("[{}] {row}", row.id);
    }
    if board.shows_load_more() {
        println!("Load More...");
    }
}

fn print_prompt<V: VoteSubmitter>(board: &RankingBoard<V>) {
    if let Some(prompt) = board.prompt() {
        println!("{prompt}");
    }
}

fn print_detail(detail: &DetailScreen, comments: &impl CommentSource) {
    let view = detail.view(comments);
    println!("{}\n{}\n{}", view.title, view.subtitle, view.marker_description);
    match view.average_rating {
        Some(average) => println!("Note Moyenne : {average:.1}/5"),
        None => println!("Note Moyenne : -"),
    }
    for review in &view.comments {
        println!("  {}★ {}", review.rating.stars(), review.comment);
    }
}

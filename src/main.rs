//! Lexisearch - CLI
//!
//! Board word search and shortest word ladders over a shared lexicon.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use lexisearch::{
    commands::{
        DEFAULT_MIN_LENGTH, check_ladder, find_ladder, find_word, list_neighbors,
        list_scorable_words, score_words,
    },
    core::{Board, Lexicon},
    output::{
        print_board, print_check_result, print_find_result, print_ladder_result,
        print_neighbors_result, print_score_result, print_words_result,
    },
    solver::{WordLadderGame, WordSearchGame},
    wordlists::loader::load_lexicon,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(
    name = "lexisearch",
    about = "Board word search and shortest word ladders",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'default' (embedded) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "default")]
    wordlist: String,

    /// Board cells in row-major order, separated by commas or spaces
    #[arg(short, long, global = true)]
    board: Option<String>,

    /// Generate a random N×N board instead of the default one
    #[arg(short, long, global = true, value_name = "N")]
    random: Option<usize>,

    /// Seed for the random board
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the board
    Board,

    /// Find the cells spelling a word
    Find {
        /// The word to look for
        word: String,
    },

    /// List every scorable word on the board (default)
    Words {
        /// Minimum word length
        #[arg(short, long, default_value_t = DEFAULT_MIN_LENGTH)]
        min: usize,
    },

    /// Score a list of words against the board
    Score {
        /// Words to score
        #[arg(required = true)]
        words: Vec<String>,

        /// Minimum word length
        #[arg(short, long, default_value_t = DEFAULT_MIN_LENGTH)]
        min: usize,
    },

    /// Find a shortest word ladder
    Ladder {
        /// First rung
        start: String,
        /// Last rung
        end: String,
    },

    /// List the words one letter away
    Neighbors {
        /// The word to branch from
        word: String,
    },

    /// Check whether the given words form a word ladder
    Check {
        /// Rungs in order
        #[arg(required = true)]
        words: Vec<String>,
    },
}

/// Split a `--board` argument into cell labels
fn parse_cells(arg: &str) -> Vec<&str> {
    arg.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|cell| !cell.is_empty())
        .collect()
}

/// Build the board from `--board`, `--random`, or the default
fn build_board(cli: &Cli) -> Result<Board> {
    match (&cli.board, cli.random) {
        (Some(_), Some(_)) => bail!("--board and --random cannot be used together"),
        (Some(cells), None) => {
            Board::new(&parse_cells(cells)).with_context(|| format!("Invalid board '{cells}'"))
        }
        (None, Some(size)) => {
            let mut rng = match cli.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            Ok(Board::random(size, &mut rng))
        }
        (None, None) => Ok(Board::default()),
    }
}

fn board_game(cli: &Cli, lexicon: Lexicon) -> Result<WordSearchGame> {
    let mut game = WordSearchGame::with_lexicon(lexicon);
    game.replace_board(build_board(cli)?);
    Ok(game)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let lexicon = load_lexicon(&cli.wordlist)
        .with_context(|| format!("Failed to load wordlist '{}'", cli.wordlist))?;

    // Default to listing words if no command given
    let default_command = Commands::Words {
        min: DEFAULT_MIN_LENGTH,
    };
    let command = cli.command.as_ref().unwrap_or(&default_command);

    match command {
        Commands::Board => print_board(&build_board(&cli)?),
        Commands::Find { word } => {
            let game = board_game(&cli, lexicon)?;
            print_find_result(&find_word(&game, word)?);
        }
        Commands::Words { min } => {
            let game = board_game(&cli, lexicon)?;
            print_board(game.board());
            print_words_result(&list_scorable_words(&game, *min)?);
        }
        Commands::Score { words, min } => {
            let game = board_game(&cli, lexicon)?;
            print_board(game.board());
            print_score_result(&score_words(&game, words, *min)?);
        }
        Commands::Ladder { start, end } => {
            let game = WordLadderGame::new(lexicon);
            print_ladder_result(&find_ladder(&game, start, end));
        }
        Commands::Neighbors { word } => {
            let game = WordLadderGame::new(lexicon);
            print_neighbors_result(&list_neighbors(&game, word));
        }
        Commands::Check { words } => {
            let game = WordLadderGame::new(lexicon);
            print_check_result(&check_ladder(&game, words));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_split_on_commas_and_spaces() {
        assert_eq!(parse_cells("a,b, c  d"), vec!["a", "b", "c", "d"]);
        assert_eq!(parse_cells("Qu,I,T,E"), vec!["Qu", "I", "T", "E"]);
        assert!(parse_cells(" , ").is_empty());
    }

    #[test]
    fn cli_parses_ladder() {
        let cli = Cli::try_parse_from(["lexisearch", "ladder", "cold", "warm", "-w", "words.txt"])
            .unwrap();
        assert_eq!(cli.wordlist, "words.txt");
        assert!(matches!(
            cli.command,
            Some(Commands::Ladder { ref start, ref end }) if start == "cold" && end == "warm"
        ));
    }

    #[test]
    fn board_sources_are_exclusive() {
        let cli = Cli::try_parse_from(["lexisearch", "-b", "a,b,c,d", "-r", "3", "board"]).unwrap();
        assert!(build_board(&cli).is_err());

        let cli = Cli::try_parse_from(["lexisearch", "-r", "3", "--seed", "1", "board"]).unwrap();
        assert_eq!(build_board(&cli).unwrap().size(), 3);

        let cli = Cli::try_parse_from(["lexisearch", "-b", "a,b,c", "board"]).unwrap();
        assert!(build_board(&cli).is_err());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

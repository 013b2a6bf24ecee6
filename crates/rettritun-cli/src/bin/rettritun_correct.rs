// rettritun-correct: apply token-level corrections to text from stdin.
//
// Reads text from stdin, runs the duplicate/compound correction
// pipeline, and prints the corrected text (or the corrected token
// stream with --tokens).
//
// Usage:
//   rettritun-correct [OPTIONS]
//
// Options:
//   --tokens           Print one corrected token per line instead of text
//   --auto-uppercase   Capitalize sentence-initial lowercase words
//   -h, --help         Print help

use rettritun_is::{TokenizerOptions, correct_text};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if rettritun_cli::wants_help(&args) {
        println!("rettritun-correct: Correct duplicated words and compound errors.");
        println!();
        println!("Usage: rettritun-correct [OPTIONS]");
        println!();
        println!("Reads Icelandic text from stdin and writes the corrected text");
        println!("to stdout. Corrections applied:");
        println!("  - accidental word duplication (\"sag\u{00F0}i sag\u{00F0}i\")");
        println!("  - words wrongly written as one (\"allskonar\")");
        println!("  - compounds wrongly written apart (\"bakdyra megin\")");
        println!();
        println!("Options:");
        println!("  --tokens           Print one corrected token per line");
        println!("  --auto-uppercase   Capitalize sentence-initial lowercase words");
        println!("  -h, --help         Print this help");
        return;
    }

    let options = TokenizerOptions {
        auto_uppercase: args.iter().any(|a| a == "--auto-uppercase"),
    };
    let show_tokens = args.iter().any(|a| a == "--tokens");

    let input = rettritun_cli::read_stdin().unwrap_or_else(|e| rettritun_cli::fatal(&e));
    let tokens = correct_text(&input, options);

    if show_tokens {
        for token in &tokens {
            let label = rettritun_cli::kind_label(token.kind);
            let text = token.text.as_deref().unwrap_or("");
            println!("{label:12} {text}");
        }
    } else {
        println!("{}", rettritun_cli::join_tokens(&tokens));
    }
}

// SPDX-License-Identifier: MPL-2.0
use album_lens::app::{self, Flags};

const HELP: &str = "\
AlbumLens - album-aware image gallery with a lightbox overlay

USAGE:
  album_lens [OPTIONS] [GALLERY]

ARGS:
  <GALLERY>  Folder or gallery.toml manifest to open

OPTIONS:
  --theme <MODE>  light, dark, or system
  -h, --help      Print help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{}", HELP);
        return Ok(());
    }

    let flags = Flags {
        theme: args.opt_value_from_str("--theme").unwrap_or(None),
        gallery_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    app::run(flags)
}

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cardsmith::{
    Card, CardDetails, CardRenderer, CardType, CropRect, FsAssetLoader, PersonDetails,
    RareDetails, RenderCardInput, RenderOptions, RotateDeg, TournamentConfig,
    resolve_template_id, resolve_template_snapshot,
};

#[derive(Parser, Debug)]
#[command(name = "cardsmith", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a card as a PNG.
    Card(CardArgs),
    /// Render only the cropped photo as a PNG.
    Crop(CropArgs),
    /// Print the template a card type resolves to.
    Snapshot(SnapshotArgs),
}

#[derive(Parser, Debug)]
struct CardArgs {
    /// Card JSON.
    #[arg(long)]
    card: PathBuf,

    /// Tournament config JSON.
    #[arg(long)]
    config: PathBuf,

    /// Subject photo path or `file://` URL.
    #[arg(long)]
    photo: String,

    /// Directory asset keys resolve against. Defaults to the config's directory.
    #[arg(long)]
    assets_root: Option<PathBuf>,

    /// Template id overriding the card's own.
    #[arg(long)]
    template: Option<String>,

    /// Write only the trim-box window.
    #[arg(long, default_value_t = false)]
    trim: bool,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Also write the render metadata JSON here.
    #[arg(long)]
    meta: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct CropArgs {
    /// Source photo path.
    #[arg(long)]
    photo: PathBuf,

    /// Crop as `x,y,w,h[,rotateDeg]` fractions of the photo.
    #[arg(long, value_parser = parse_crop)]
    crop: CropRect,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SnapshotArgs {
    /// Tournament config JSON.
    #[arg(long)]
    config: PathBuf,

    /// Card type, e.g. `player` or `super-rare`.
    #[arg(long, default_value = "player", value_parser = parse_card_type)]
    card_type: CardType,

    /// Explicit template id.
    #[arg(long)]
    template: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Card(args) => cmd_card(args),
        Command::Crop(args) => cmd_crop(args),
        Command::Snapshot(args) => cmd_snapshot(args),
    }
}

fn cmd_card(args: CardArgs) -> anyhow::Result<()> {
    let card = Card::from_path(&args.card)?;
    let config = TournamentConfig::from_path(&args.config)?;
    let assets_root = args.assets_root.clone().unwrap_or_else(|| {
        args.config
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf()
    });

    let renderer = CardRenderer::new(
        RenderOptions::from_env(),
        Arc::new(FsAssetLoader::new(&assets_root)),
    );
    let resolve = |key: &str| key.to_string();
    let input = RenderCardInput {
        card: &card,
        config: &config,
        image_url: &args.photo,
        resolve_asset_url: &resolve,
        template_id: args.template.as_deref(),
    };
    let rendered = if args.trim {
        renderer.render_preview_trim(&input)?
    } else {
        renderer.render_card(&input)?
    };

    write_output(&args.out, &rendered.encode_png()?)?;
    if let Some(meta_path) = &args.meta {
        let key = args.out.to_string_lossy().to_string();
        let meta = rendered.render_meta(key, unix_timestamp());
        let json = serde_json::to_vec_pretty(&meta).context("serialize render meta")?;
        write_output(meta_path, &json)?;
    }

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_crop(args: CropArgs) -> anyhow::Result<()> {
    let root = args
        .photo
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();
    let file = args
        .photo
        .file_name()
        .context("photo path has no file name")?
        .to_string_lossy()
        .to_string();

    let renderer = CardRenderer::new(
        RenderOptions {
            system_fonts: false,
            ..RenderOptions::default()
        },
        Arc::new(FsAssetLoader::new(root)),
    );
    let image = renderer.render_crop(&file, args.crop)?;
    write_output(&args.out, &image.encode_png()?)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_snapshot(args: SnapshotArgs) -> anyhow::Result<()> {
    let config = TournamentConfig::from_path(&args.config)?;
    let template_id =
        resolve_template_id(args.template.as_deref(), Some(args.card_type), Some(&config));
    let resolved = resolve_template_snapshot(&blank_card(args.card_type), &config, Some(&template_id));

    let out = serde_json::json!({
        "templateId": resolved.template_id,
        "templateSnapshot": resolved.snapshot,
    });
    println!("{}", serde_json::to_string_pretty(&out).context("serialize snapshot")?);
    Ok(())
}

/// Snapshot resolution only reads a card's type and stored template id.
fn blank_card(card_type: CardType) -> Card {
    let person = PersonDetails::default();
    Card::new(match card_type {
        CardType::Player => CardDetails::Player(person),
        CardType::TeamStaff => CardDetails::TeamStaff(person),
        CardType::Media => CardDetails::Media(person),
        CardType::Official => CardDetails::Official(person),
        CardType::TournamentStaff => CardDetails::TournamentStaff(person),
        CardType::NationalTeam => CardDetails::NationalTeam(person),
        CardType::Rare => CardDetails::Rare(RareDetails::default()),
        CardType::SuperRare => CardDetails::SuperRare(RareDetails::default()),
    })
}

fn write_output(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))
}

fn unix_timestamp() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    secs.to_string()
}

fn parse_card_type(s: &str) -> Result<CardType, String> {
    CardType::parse(s).ok_or_else(|| {
        let known: Vec<&str> = CardType::ALL.iter().map(|t| t.as_str()).collect();
        format!("unknown card type '{s}' (expected one of: {})", known.join(", "))
    })
}

fn parse_crop(s: &str) -> Result<CropRect, String> {
    let parts: Vec<f64> = s
        .split(',')
        .map(|p| p.trim().parse::<f64>().map_err(|e| format!("bad number '{p}': {e}")))
        .collect::<Result<_, _>>()?;
    let (x, y, w, h, rotate) = match parts.as_slice() {
        [x, y, w, h] => (*x, *y, *w, *h, 0.0),
        [x, y, w, h, r] => (*x, *y, *w, *h, *r),
        _ => return Err("expected x,y,w,h or x,y,w,h,rotateDeg".to_string()),
    };
    Ok(CropRect {
        x,
        y,
        w,
        h,
        rotate_deg: RotateDeg::from_degrees(rotate),
    }
    .clamped())
}

use anyhow::bail;
use clap::Parser;
use env_logger::Env;
use log::info;

use surface_basis::lattice::{cubic_cell, orthorhombic_cell, triclinic_cell};
use surface_basis::{free_surface_basis, BasisOptions, CellSetting, CutAxis, DirectionSet, Lattice};

#[derive(Parser)]
#[command(name = "surface-basis")]
#[command(about = "Compute periodic lattice vectors for a crystallographic free surface")]
#[command(version)]
struct Cli {
    /// Plane indices: h,k,l or h,k,i,l
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    hkl: Vec<f64>,

    /// Cell parameters: a | a,b,c | a,b,c,alpha,beta,gamma (angles in
    /// degrees). Cubic unit cell when omitted
    #[arg(long, value_delimiter = ',')]
    cell: Option<Vec<f64>>,

    /// Conventional cell setting (p, a, b, c, i, f) when the cell is a
    /// primitive cell
    #[arg(long)]
    setting: Option<String>,

    /// Which output vector is out-of-plane: a, b or c
    #[arg(long, default_value = "c")]
    cut_axis: String,

    /// Bound for the integer search window (default: auto from the indices)
    #[arg(long)]
    max_index: Option<i64>,

    /// Emit four-index Miller-Bravais vectors
    #[arg(long)]
    hex: bool,

    /// Also print the Cartesian plane normal
    #[arg(long)]
    normal: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let lattice = build_lattice(&cli)?;
    let setting = cli
        .setting
        .as_deref()
        .map(str::parse::<CellSetting>)
        .transpose()?;
    let cut_axis = match cli.cut_axis.as_str() {
        "a" => CutAxis::A,
        "b" => CutAxis::B,
        "c" => CutAxis::C,
        other => bail!("unknown cut axis '{}'; allowed values are a, b and c", other),
    };

    let options = BasisOptions {
        cut_axis,
        max_index: cli.max_index,
        return_hexagonal: if cli.hex { Some(true) } else { None },
        return_plane_normal: cli.normal,
        conventional_setting: setting,
    };

    info!("solving free-surface basis for plane {:?}", cli.hkl);
    let basis = free_surface_basis(&cli.hkl, &lattice, &options)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&basis)?);
        return Ok(());
    }

    match &basis.vectors {
        DirectionSet::Miller(m) => {
            for i in 0..3 {
                let row = m.row(i);
                println!("[{:10.6} {:10.6} {:10.6}]", row[0], row[1], row[2]);
            }
        }
        DirectionSet::MillerBravais(m) => {
            for i in 0..3 {
                let row = m.row(i);
                println!(
                    "[{:10.6} {:10.6} {:10.6} {:10.6}]",
                    row[0], row[1], row[2], row[3]
                );
            }
        }
    }
    if let Some(normal) = &basis.plane_normal {
        println!(
            "normal: [{:10.6} {:10.6} {:10.6}]",
            normal[0], normal[1], normal[2]
        );
    }

    Ok(())
}

fn build_lattice(cli: &Cli) -> anyhow::Result<Lattice> {
    let lattice = match cli.cell.as_deref() {
        None => Lattice::default(),
        Some([a]) => cubic_cell(*a)?,
        Some([a, b, c]) => orthorhombic_cell(*a, *b, *c)?,
        Some([a, b, c, alpha, beta, gamma]) => triclinic_cell(
            *a,
            *b,
            *c,
            alpha.to_radians(),
            beta.to_radians(),
            gamma.to_radians(),
        )?,
        Some(other) => bail!(
            "--cell expects 1, 3 or 6 comma-separated values, got {}",
            other.len()
        ),
    };
    Ok(lattice)
}

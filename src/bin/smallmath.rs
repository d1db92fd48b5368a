use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use anyhow::{Context, bail};
    use clap::{Parser, Subcommand};
    use smallmath::{Matrix2, Matrix3, Matrix4};

    #[derive(Debug, Parser)]
    #[command(about = "Inspect small matrices", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Print the determinant of a matrix
        Determinant {
            /// 4, 9 or 16 matrix entries in row-major order
            #[arg(required = true, allow_negative_numbers = true)]
            entries: Vec<f32>,
        },
        /// Print the inverse of a matrix
        Invert {
            /// Fail on a singular matrix instead of printing the identity
            /// matrix
            #[arg(long)]
            strict: bool,

            /// 4, 9 or 16 matrix entries in row-major order
            #[arg(required = true, allow_negative_numbers = true)]
            entries: Vec<f32>,
        },
        /// Print the adjugate of a matrix
        Adjugate {
            /// 4, 9 or 16 matrix entries in row-major order
            #[arg(required = true, allow_negative_numbers = true)]
            entries: Vec<f32>,
        },
        /// Split a matrix into scale, rotation and translation
        Decompose {
            /// 4, 9 or 16 matrix entries in row-major order
            #[arg(required = true, allow_negative_numbers = true)]
            entries: Vec<f32>,
        },
    }

    #[derive(Clone, Copy, Debug)]
    enum SquareMatrix {
        Two(Matrix2),
        Three(Matrix3),
        Four(Matrix4),
    }

    impl SquareMatrix {
        fn parse(entries: &[f32]) -> Result<Self> {
            let matrix = if let Ok(entries) = <[f32; 4]>::try_from(entries) {
                Self::Two(Matrix2::from_rows_array(bytemuck::cast(entries)))
            } else if let Ok(entries) = <[f32; 9]>::try_from(entries) {
                Self::Three(Matrix3::from_rows_array(bytemuck::cast(entries)))
            } else if let Ok(entries) = <[f32; 16]>::try_from(entries) {
                Self::Four(Matrix4::from_rows_array(bytemuck::cast(entries)))
            } else {
                bail!("Expected 4, 9 or 16 matrix entries, got {}", entries.len());
            };
            log::debug!("Parsed matrix: {matrix:?}");
            Ok(matrix)
        }

        fn determinant(&self) -> f32 {
            match self {
                Self::Two(m) => m.determinant(),
                Self::Three(m) => m.determinant(),
                Self::Four(m) => m.determinant(),
            }
        }

        fn inverse(&self, strict: bool) -> Result<String> {
            let inverse = match self {
                Self::Two(m) if strict => m.try_inverted()?.to_string(),
                Self::Three(m) if strict => m.try_inverted()?.to_string(),
                Self::Four(m) if strict => m.try_inverted()?.to_string(),
                Self::Two(m) => m.inverted().to_string(),
                Self::Three(m) => m.inverted().to_string(),
                Self::Four(m) => m.inverted().to_string(),
            };
            Ok(inverse)
        }

        fn adjugate(&self) -> String {
            match self {
                Self::Two(m) => m.adjugate().to_string(),
                Self::Three(m) => m.adjugate().to_string(),
                Self::Four(m) => m.adjugate().to_string(),
            }
        }

        fn decomposition(&self) -> String {
            match self {
                Self::Two(m) => format!(
                    "scale: {}\nrotation:\n{}",
                    m.scale_component(),
                    m.rotation_component()
                ),
                Self::Three(m) => format!(
                    "scale: {}\nrotation:\n{}",
                    m.scale_component(),
                    m.rotation_component()
                ),
                Self::Four(m) => format!(
                    "scale: {}\nrotation:\n{}\ntranslation: {}",
                    m.scale_component(),
                    m.rotation_component(),
                    m.translation_component()
                ),
            }
        }
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();

        match cli.command {
            Command::Determinant { entries } => {
                println!("{}", SquareMatrix::parse(&entries)?.determinant());
            }
            Command::Invert { strict, entries } => {
                let inverse = SquareMatrix::parse(&entries)?
                    .inverse(strict)
                    .context("Failed to invert matrix")?;
                println!("{inverse}");
            }
            Command::Adjugate { entries } => {
                println!("{}", SquareMatrix::parse(&entries)?.adjugate());
            }
            Command::Decompose { entries } => {
                println!("{}", SquareMatrix::parse(&entries)?.decomposition());
            }
        }
        Ok(())
    }
}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}

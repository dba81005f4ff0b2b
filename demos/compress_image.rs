//! Compress a grayscale image to a chosen rank and write the result as PNG.
//!
//! Usage: `cargo run --example compress_image -- <image> [rank]`
//!
//! Without an image argument a random low-rank test image is used. Set
//! `RUST_LOG=debug` to see the decomposition and reconstruction steps.

use svd_image_compression::prelude::*;

pub fn main() -> Result<(), ImageCompressionError> {
    env_logger::init();

    let mut args = std::env::args().skip(1);

    let image = match args.next() {
        Some(path) => load_grayscale(path)?,
        None => {
            let mut rng = rand::thread_rng();
            random_low_rank_image((240, 320), 12, &mut rng)
        }
    };

    let factorization = decompose::<f64>(image.view())?;

    let rank = match args.next() {
        Some(arg) => arg.parse::<usize>().map_err(|err| {
            ImageCompressionError::InvalidInput(format!("invalid rank '{}': {}", arg, err))
        })?,
        None => factorization.default_rank(),
    };

    let reconstruction = factorization.compress(CompressionType::RANK(rank))?;

    println!("Full rank: {}", factorization.full_rank());
    println!("Size: {} x {} pixels", image.nrows(), image.ncols());
    println!("Approximated rank: {}", reconstruction.rank);
    println!("Information retained: {:.2}%", reconstruction.fidelity);
    println!(
        "Relative error: {:.4}",
        reconstruction.pixels.rel_diff(image.view())
    );
    println!(
        "Representing this {} pixel image using only {} data points ({:.2}x).",
        reconstruction.pixel_count,
        reconstruction.parameter_count,
        reconstruction.compression_ratio()
    );

    let file_name = download_file_name(reconstruction.rank);
    save_png(reconstruction.pixels.view(), &file_name)?;
    println!("Saved {}", file_name);

    Ok(())
}

use clap::Parser;
use retrocore::core::Machine;
use retromachine::System;
use retromachine::system::VideoMode;
use std::fs;

/// Headless harness: load a flat ROM image, run N frames, dump the final
/// framebuffer to a PNG.
#[derive(Parser, Debug)]
#[command(name = "retro")]
struct Args {
    /// Flat binary ROM image loaded into the banked-ROM window.
    #[arg(long)]
    rom: Option<String>,

    /// Number of frames to run before dumping the framebuffer.
    #[arg(long, default_value_t = 60)]
    frames: u32,

    /// Number of 8 KiB banked-RAM banks to configure.
    #[arg(long, default_value_t = 32)]
    ram_banks: usize,

    /// Output composite mode: vga or ntsc.
    #[arg(long, default_value = "vga")]
    video_mode: String,

    /// Path to write the final framebuffer as a PNG.
    #[arg(long, default_value = "frame.png")]
    snapshot_out: String,
}

fn main() {
    let args = Args::parse();

    let mut system = System::new(args.ram_banks, 32);
    system.set_video_mode(match args.video_mode.as_str() {
        "ntsc" => VideoMode::Ntsc,
        _ => VideoMode::Vga,
    });

    if let Some(path) = &args.rom {
        match fs::read(path) {
            Ok(data) => {
                if let Err(e) = retromachine::load_flat_rom(&data, system.rom_mut()) {
                    eprintln!("failed to load ROM {path}: {e}");
                    std::process::exit(1);
                }
            }
            Err(e) => {
                eprintln!("failed to read ROM {path}: {e}");
                std::process::exit(1);
            }
        }
    }

    system.reset();
    for _ in 0..args.frames {
        system.run_frame();
    }

    println!(
        "ran {} frames, {} instructions, {} cycles",
        args.frames, system.cpu.instructions, system.cpu.cycles
    );

    let (w, h) = system.display_size();
    let mut buffer = vec![0u8; (w * h * 3) as usize];
    system.render_frame(&mut buffer);

    if let Err(e) = write_png(&args.snapshot_out, w, h, &buffer) {
        eprintln!("failed to write snapshot {}: {e}", args.snapshot_out);
        std::process::exit(1);
    }
}

fn write_png(path: &str, width: u32, height: u32, rgb: &[u8]) -> Result<(), png::EncodingError> {
    let file = fs::File::create(path).map_err(png::EncodingError::IoError)?;
    let writer = std::io::BufWriter::new(file);
    let mut encoder = png::Encoder::new(writer, width, height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(rgb)?;
    Ok(())
}

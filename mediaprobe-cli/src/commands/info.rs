use anyhow::{Context, Result};
use log::info;
use mediaprobe_core::media::properties::value_to_string;
use mediaprobe_core::{Chapter, JsonProperties, MediaInformation, MediaInformationParser, StreamInformation};
use serde_json::{Map, Value};

use crate::cli::InfoArgs;
use crate::config::InfoConfig;
use crate::input::read_input;
use crate::output::{print_heading, print_info, print_optional, print_section, print_warning};

/// Execute the `info` command
pub fn run_info(args: &InfoArgs) -> Result<()> {
    let config = InfoConfig::from(args);
    let bytes = read_input(&args.input)?;

    let media_information = if config.lenient {
        match MediaInformationParser::from_json_bytes(&bytes) {
            Some(info) => info,
            None => {
                print_warning("No media information available.");
                return Ok(());
            }
        }
    } else {
        MediaInformationParser::from_json_bytes_with_error(&bytes)
            .with_context(|| format!("Failed to parse '{}'", args.input.display()))?
    };

    info!(
        "Loaded {} stream(s) and {} chapter(s) from {}",
        media_information.streams().len(),
        media_information.chapters().len(),
        args.input.display()
    );

    if config.raw {
        let pretty = serde_json::to_string_pretty(media_information.all_properties())?;
        println!("{}", pretty);
        return Ok(());
    }

    print_media_information(&media_information, &config);
    Ok(())
}

fn print_media_information(info: &MediaInformation, config: &InfoConfig) {
    print_heading("Media Information");
    print_optional("Filename", info.filename());
    print_optional("Format", info.format());
    print_optional("Long format", info.long_format());
    print_optional("Start time", info.start_time());
    print_optional("Duration", info.duration());
    print_optional("Size", info.size());
    print_optional("Bitrate", info.bitrate());

    if config.show_tags {
        print_tags(info.tags());
    }

    if config.show_streams {
        print_section(&format!("Streams ({})", info.streams().len()));
        for stream in info.streams() {
            print_stream(stream, config);
        }
    }

    if config.show_chapters {
        print_section(&format!("Chapters ({})", info.chapters().len()));
        for chapter in info.chapters() {
            print_chapter(chapter, config);
        }
    }
}

fn print_stream(stream: &StreamInformation, config: &InfoConfig) {
    let index = stream.index().map_or_else(|| "?".to_string(), |i| i.to_string());
    let stream_type = stream.stream_type().unwrap_or_else(|| "unknown".to_string());
    let codec = stream.codec().unwrap_or_else(|| "unknown".to_string());
    println!("#{} {} ({})", index, stream_type, codec);

    if let Some(codec_long) = stream.codec_long() {
        print_info("  Codec", codec_long);
    }
    if let (Some(width), Some(height)) = (stream.width(), stream.height()) {
        print_info("  Resolution", format!("{}x{}", width, height));
    }
    if let Some(format) = stream.format() {
        print_info("  Pixel format", format);
    }
    if let Some(frame_rate) = stream.average_frame_rate() {
        print_info("  Frame rate", frame_rate);
    }
    if let Some(sample_rate) = stream.sample_rate() {
        print_info("  Sample rate", sample_rate);
    }
    if let Some(channel_layout) = stream.channel_layout() {
        print_info("  Channel layout", channel_layout);
    }
    if let Some(bitrate) = stream.bitrate() {
        print_info("  Bitrate", bitrate);
    }
    if config.show_tags {
        print_inline_tags(stream.tags());
    }
}

fn print_chapter(chapter: &Chapter, config: &InfoConfig) {
    let id = chapter.id().map_or_else(|| "?".to_string(), |i| i.to_string());
    let start = chapter.start_time().unwrap_or_else(|| "?".to_string());
    let end = chapter.end_time().unwrap_or_else(|| "?".to_string());
    println!("#{} {} - {}", id, start, end);

    if let Some(title) = chapter.title() {
        print_info("  Title", title);
    }
    if config.show_tags {
        print_inline_tags(chapter.tags());
    }
}

fn print_tags(tags: Option<&Map<String, Value>>) {
    let Some(tags) = tags else {
        return;
    };

    print_section("Tags");
    for (key, value) in tags {
        print_info(key, value_to_string(value));
    }
}

fn print_inline_tags(tags: Option<&Map<String, Value>>) {
    let Some(tags) = tags else {
        return;
    };

    for (key, value) in tags {
        print_info(&format!("  tag:{}", key), value_to_string(value));
    }
}

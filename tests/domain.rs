use mediadeck::domain::{
    Advance, AdvancePolicy, MediaKind, Playlist, Visualizer, VisualizerStyle,
    collect_media_files, file_name, parse_dropped_paths, read_title, resolve_open_path,
};
use rand::{SeedableRng, rngs::StdRng};
use std::{fs, path::PathBuf, time::Duration};

fn policy(looping: bool, shuffling: bool) -> AdvancePolicy {
    AdvancePolicy { looping, shuffling }
}

#[test]
fn opened_directory_plays_through_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("disc2");
    fs::create_dir(&nested).unwrap();
    for p in [
        dir.path().join("02.flac"),
        dir.path().join("01.mp3"),
        dir.path().join("cover.png"),
        nested.join("03.mkv"),
    ] {
        fs::write(p, b"x").unwrap();
    }

    let files = resolve_open_path(&dir.path().to_string_lossy()).unwrap();
    assert_eq!(files, collect_media_files(dir.path()));
    let names: Vec<_> = files.iter().map(|p| file_name(p)).collect();
    assert_eq!(names, vec!["01.mp3", "02.flac", "03.mkv"]);

    let mut playlist = Playlist::new();
    let started: Vec<bool> = files.into_iter().map(|f| playlist.add(f)).collect();
    assert_eq!(started, vec![true, false, false]);

    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(playlist.advance(policy(false, false), &mut rng), Advance::Next(1));
    assert_eq!(playlist.advance(policy(false, false), &mut rng), Advance::Next(2));
    assert_eq!(playlist.advance(policy(false, false), &mut rng), Advance::Stop);

    let kinds: Vec<_> = playlist
        .entries()
        .iter()
        .map(|e| MediaKind::classify(e.path()))
        .collect();
    assert_eq!(kinds, vec![MediaKind::Audio, MediaKind::Audio, MediaKind::Video]);
}

#[test]
fn looping_beats_shuffle_and_clear_starts_over() {
    let mut playlist = Playlist::new();
    for name in ["a.mp3", "b.mp3", "c.mp3"] {
        playlist.add(PathBuf::from(name));
    }
    playlist.select(1);

    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..10 {
        assert_eq!(playlist.advance(policy(true, true), &mut rng), Advance::Replay(1));
    }

    playlist.clear();
    assert!(playlist.is_empty());
    assert_eq!(playlist.current(), None);
    assert_eq!(playlist.advance(policy(false, true), &mut rng), Advance::Stop);
    assert!(playlist.add(PathBuf::from("d.wav")));
}

#[test]
fn dropped_uris_and_quoted_paths() {
    let payload = "file:///media/My%20Song.FLAC '/media/a clip.mp4' /media/readme.md";
    assert_eq!(
        parse_dropped_paths(payload),
        vec![
            PathBuf::from("/media/My Song.FLAC"),
            PathBuf::from("/media/a clip.mp4"),
        ]
    );
}

#[test]
fn unreadable_tags_fall_back_to_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fake.mp3");
    fs::write(&path, b"definitely not an mp3").unwrap();
    assert_eq!(read_title(&path), None);
}

#[test]
fn pulse_bars_follow_the_clock() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut viz = Visualizer::new(VisualizerStyle::Pulse, 60);

    viz.update(Duration::from_secs(2), &mut rng);
    let first = viz.bars().to_vec();
    assert_eq!(first.len(), 60);
    assert!(first.iter().all(|h| (0.1..=0.5).contains(h)));

    viz.update(Duration::from_secs(2), &mut rng);
    assert_eq!(viz.bars(), first.as_slice());

    viz.reset();
    assert!(viz.bars().iter().all(|h| *h == 0.0));
}

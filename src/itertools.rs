/// (start, end) windows over 0..length. step = win_len - win_ovlp
pub fn sliding_window(
    length: usize,
    win_len: usize,
    win_ovlp: usize,
    drop_last: bool,
) -> impl Iterator<Item = (usize, usize)> {
    assert!(win_len > win_ovlp);
    let step = win_len - win_ovlp;

    (0..)
        .map(move |i| i * step)
        .take_while(move |&start| start < length)
        .map(move |start| {
            let end = (start + win_len).min(length);
            (start, end)
        })
        .filter(move |&(start, end)| !drop_last || (end - start == win_len))
}

/// every full window of `k` symbols, stride 1. length - k + 1 items when k <= length
pub fn kmer_windows(length: usize, k: usize) -> impl Iterator<Item = (usize, usize)> {
    assert!(k > 0);
    sliding_window(length, k, k - 1, true)
}

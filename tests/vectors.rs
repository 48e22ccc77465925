use sha256_digest::{BLOCK_SIZE, Digest, Sha256, digest};

fn check(data: &[u8], expected: &str) {
    let one_shot = digest(data).unwrap();
    assert_eq!(one_shot.to_hex(), expected, "one-shot, len {}", data.len());

    let mut hasher = Sha256::new();
    for piece in data.chunks(BLOCK_SIZE - 1) {
        hasher.update(piece).unwrap();
    }
    assert_eq!(hasher.finalize().unwrap(), one_shot, "incremental, len {}", data.len());
}

#[test]
fn fips_180_vectors() {
    check(
        b"",
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    );
    check(
        b"abc",
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    );
    check(
        b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    );
}

#[test]
fn one_million_a() {
    check(
        &vec![b'a'; 1_000_000],
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0",
    );
}

#[test]
fn padding_boundary_lengths() {
    let cases = [
        (0, "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"),
        (55, "9f4390f8d30c2dd92ec9f095b65e2b9ae9b0a925a5258e241c9f1e910f734318"),
        (56, "b35439a4ac6f0948b6d6f9e3c6af0f5f590ce20f1bde7090ef7970686ec6738a"),
        (63, "7d3e74a05d7db15bce4ad9ec0658ea98e3f06eeecf16b4c6fff2da457ddc2f34"),
        (64, "ffe054fe7ae0cb6dc65c3af9b61d5209f439851db43d0ba5997337df154668eb"),
        (119, "31eba51c313a5c08226adf18d4a359cfdfd8d2e816b13f4af952f7ea6584dcfb"),
        (120, "2f3d335432c70b580af0e8e1b3674a7c020d683aa5f73aaaedfdc55af904c21c"),
        (128, "6836cf13bac400e9105071cd6af47084dfacad4e5e302c94bfed24e013afb73e"),
    ];
    for (len, expected) in cases {
        check(&vec![b'a'; len], expected);
    }
}

#[test]
fn every_byte_value() {
    let data: Vec<u8> = (0..=255u8).collect();
    check(
        &data,
        "40aff2e9d2d8922e47afd4648e6967497158785fbd1da870e7110266bf944880",
    );
}

#[test]
fn parsed_digest_compares_equal() {
    let expected: Digest = "0xb94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        .parse()
        .unwrap();
    assert_eq!(digest(b"hello world").unwrap(), expected);
}

#[test]
fn independent_inputs_hash_in_parallel() {
    let inputs: Vec<Vec<u8>> = (0..8u8).map(|i| vec![i; 1000 + usize::from(i)]).collect();
    let serial: Vec<Digest> = inputs.iter().map(|d| digest(d).unwrap()).collect();

    let parallel: Vec<Digest> = std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|data| scope.spawn(move || digest(data).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(serial, parallel);
}

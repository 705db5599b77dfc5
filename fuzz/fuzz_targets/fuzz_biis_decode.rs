#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

use biis_xml::biis::{decode, BiisDecoder, DispatchTable};
use biis_xml::plugin::{BiisReader, ImportWorker, ImportWorkerConfiguration, PARAMETER_NAME};

fuzz_target!(|data: &[u8]| {
    // Decoding must either succeed or fail with an error, never panic
    let _ = decode(Cursor::new(data));

    // Same input through an extended table and trimmed text
    let table = DispatchTable::standard()
        .with_key_figure("MarketValue")
        .with_key_figure("CapitalizationRate");
    let _ = BiisDecoder::new(Cursor::new(data))
        .with_table(table)
        .trim_text(true)
        .decode();

    // The host contract must always accept an import configuration once
    let mut reader = BiisReader::new();
    let config = ImportWorkerConfiguration::new().with_stream(PARAMETER_NAME, Cursor::new(data.to_vec()));
    assert!(reader.load(config.into()).is_ok());
    assert!(reader.container().is_some());
    reader.unload();
});

use ls8_core::soc::OutputSink;
use mockall::mock;
use std::io;

mock! {
    pub Sink {}
    impl OutputSink for Sink {
        fn name(&self) -> &'static str;
        fn emit(&mut self, value: u8) -> io::Result<()>;
    }
}

/// A mock sink that accepts name queries from logging and `Debug`.
pub fn named_sink() -> MockSink {
    let mut sink = MockSink::new();
    let _ = sink.expect_name().return_const("MOCK");
    sink
}

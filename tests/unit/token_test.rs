#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::panic::{self, AssertUnwindSafe};
    use std::thread;
    use std::time::Duration;

    use crate::record::{ProfilingRecord, SourceLocation};
    use crate::token::TimingToken;

    #[test]
    fn test_duration_covers_the_scope() {
        let delivered = RefCell::new(Vec::<ProfilingRecord>::new());
        let sleep = Duration::from_millis(30);
        {
            let _token = TimingToken::open(
                |r| delivered.borrow_mut().push(r),
                "test",
                false,
                SourceLocation::unknown(),
            );
            thread::sleep(sleep);
        }
        let delivered = delivered.into_inner();
        assert_eq!(delivered.len(), 1);
        assert!(delivered[0].duration >= sleep);
        assert_eq!(delivered[0].tag, "test");
        assert!(!delivered[0].silent);
    }

    #[test]
    fn test_silent_token_never_delivers() {
        let calls = RefCell::new(0);
        let token = TimingToken::open(
            |_| *calls.borrow_mut() += 1,
            "quiet",
            true,
            SourceLocation::unknown(),
        );
        assert!(token.is_silent());
        token.close();
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_explicit_close_delivers_once() {
        let calls = RefCell::new(0);
        let token = TimingToken::open(
            |_| *calls.borrow_mut() += 1,
            "once",
            false,
            SourceLocation::unknown(),
        );
        assert_eq!(token.tag(), "once");
        token.close();
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_record_carries_location() {
        let delivered = RefCell::new(None);
        TimingToken::open(
            |r| *delivered.borrow_mut() = Some(r),
            "located",
            false,
            SourceLocation::new("Foo.cs", 42),
        )
        .close();
        let record = delivered.into_inner().expect("record delivered");
        assert_eq!(record.source_file, "Foo.cs");
        assert_eq!(record.source_line, 42);
    }

    #[test]
    fn test_start_captures_call_site() {
        let delivered = RefCell::new(None);
        let line = line!() + 1;
        let token = TimingToken::start(|r| *delivered.borrow_mut() = Some(r), "here", false);
        token.close();
        let record = delivered.into_inner().expect("record delivered");
        assert_eq!(record.source_line, line);
        assert!(record.source_file.ends_with("token_test.rs"));
    }

    #[test]
    fn test_elapsed_grows_while_open() {
        let token = TimingToken::open(|_| {}, "open", true, SourceLocation::unknown());
        thread::sleep(Duration::from_millis(5));
        assert!(token.elapsed() >= Duration::from_millis(5));
        assert!(token.elapsed_ms() >= 5);
    }

    #[test]
    fn test_panic_still_closes_token() {
        let delivered = RefCell::new(Vec::<ProfilingRecord>::new());
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let _token = TimingToken::open(
                |r| delivered.borrow_mut().push(r),
                "boom",
                false,
                SourceLocation::unknown(),
            );
            panic!("work failed");
        }));
        assert!(result.is_err());
        assert_eq!(delivered.borrow().len(), 1);
        assert_eq!(delivered.borrow()[0].tag, "boom");
    }

    #[test]
    fn test_panicking_sink_during_unwind_keeps_original_panic() {
        let result = panic::catch_unwind(|| {
            let _token = TimingToken::open(
                |_| panic!("sink failed"),
                "double",
                false,
                SourceLocation::unknown(),
            );
            panic!("work failed");
        });
        let payload = result.unwrap_err();
        assert_eq!(payload.downcast_ref::<&str>(), Some(&"work failed"));
    }

    #[test]
    fn test_panicking_sink_propagates_from_close() {
        let result = panic::catch_unwind(|| {
            TimingToken::open(
                |_| panic!("sink failed"),
                "sink",
                false,
                SourceLocation::unknown(),
            )
            .close();
        });
        let payload = result.unwrap_err();
        assert_eq!(payload.downcast_ref::<&str>(), Some(&"sink failed"));
    }
}

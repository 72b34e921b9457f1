use std::fmt::Debug;

/// Receives every value a full stack discards to make room for a push.
///
/// Called synchronously from inside `push`, once per leaked value, before the
/// new value is stored.
pub trait LeakObserver<T> {
    fn leaked(&mut self, value: T);
}

/// Reports leaked values through the `log` facade and drops them.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogLeaks;

impl<T: Debug> LeakObserver<T> for LogLeaks {
    fn leaked(&mut self, value: T) {
        log::info!(target: "leakystack", "reached stack limit, so forgot the value {:?}", value);
    }
}

/// Drops leaked values without telling anyone.
#[derive(Debug, Default, Clone, Copy)]
pub struct DropLeaks;

impl<T> LeakObserver<T> for DropLeaks {
    fn leaked(&mut self, _value: T) {}
}

impl<T, F: FnMut(T)> LeakObserver<T> for F {
    fn leaked(&mut self, value: T) {
        self(value)
    }
}

#[cfg(test)]
mod test {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    fn notify<T, O: LeakObserver<T>>(observer: &mut O, value: T) {
        observer.leaked(value);
    }

    #[test]
    fn closures_receive_values() {
        let seen: Rc<RefCell<Vec<u32>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut observer = move |v: u32| sink.borrow_mut().push(v);

        notify(&mut observer, 3);
        notify(&mut observer, 5);

        assert_eq!(*seen.borrow(), vec!(3, 5));
    }

    #[test]
    fn log_leaks_accepts_debug_values() {
        let _ = env_logger::builder().is_test(true).try_init();
        notify(&mut LogLeaks, "gone");
        notify(&mut LogLeaks, (1, 2));
    }

    #[test]
    fn drop_leaks_drops() {
        let value = Rc::new(());
        notify(&mut DropLeaks, value.clone());
        assert_eq!(Rc::strong_count(&value), 1);
    }
}

use std::sync::{Arc, RwLock};

type Subscriber<T> = Arc<dyn Fn(&T) + Send + Sync>;

///
/// State container that tells its subscribers about every change.
/// Subscribers run after every lock is released, so they may read the
/// container again or add further subscribers.
///
pub struct Observable<T> {
    value: RwLock<T>,
    subscribers: RwLock<Vec<Subscriber<T>>>,
}

impl<T: Clone> Observable<T> {
    pub fn new(value: T) -> Self {
        Observable { value: RwLock::new(value), subscribers: RwLock::new(vec![]) }
    }

    pub fn get(&self) -> T {
        self.value.read().unwrap_or_else(|err| err.into_inner()).clone()
    }

    pub fn subscribe(&self, subscriber: impl Fn(&T) + Send + Sync + 'static) {
        self.subscribers.write().unwrap_or_else(|err| err.into_inner()).push(Arc::new(subscriber));
    }

    pub fn update(&self, change: impl FnOnce(&mut T)) {
        let snapshot = {
            let mut value = self.value.write().unwrap_or_else(|err| err.into_inner());
            change(&mut value);
            value.clone()
        };

        let subscribers = self.subscribers.read().unwrap_or_else(|err| err.into_inner()).clone();
        for subscriber in subscribers {
            subscriber(&snapshot);
        }
    }
}

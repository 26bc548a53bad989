//! Benachrichtigungen über Änderungen an benannten Layern.
//!
//! Beobachter werden synchron in Registrierungsreihenfolge aufgerufen. Die
//! Events sind reine Hinweise: der Editor wartet auf keine Antwort.

/// Änderung an einem benannten Layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerEvent {
    Created { name: String },
    Renamed { old: String, new: String },
    Deleted { name: String },
    /// Layer wurde als Auswahl-Klammer aktiviert
    Selected { name: String },
}

impl LayerEvent {
    /// Aktueller Name der betroffenen Region.
    pub fn name(&self) -> &str {
        match self {
            Self::Created { name } | Self::Deleted { name } | Self::Selected { name } => name,
            Self::Renamed { new, .. } => new,
        }
    }
}

/// Empfänger von [`LayerEvent`]s (z.B. die Render-Schicht).
pub trait LayerObserver {
    fn on_layer_event(&mut self, event: &LayerEvent);
}

impl<F> LayerObserver for F
where
    F: FnMut(&LayerEvent),
{
    fn on_layer_event(&mut self, event: &LayerEvent) {
        self(event)
    }
}

/// Geordnete Liste registrierter Beobachter.
#[derive(Default)]
pub struct LayerObservers {
    observers: Vec<Box<dyn LayerObserver>>,
}

impl LayerObservers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert einen Beobachter am Ende der Liste.
    pub fn register(&mut self, observer: impl LayerObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Stellt ein Event allen Beobachtern zu.
    pub fn notify(&mut self, event: LayerEvent) {
        log::debug!("Layer-Event: {:?}", event);
        for observer in &mut self.observers {
            observer.on_layer_event(&event);
        }
    }
}

impl std::fmt::Debug for LayerObservers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayerObservers")
            .field("len", &self.observers.len())
            .finish()
    }
}

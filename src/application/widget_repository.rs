// Repository trait for widget definitions and their datasets
use crate::domain::widget::WidgetDefinition;

pub trait WidgetRepository: Send + Sync {
    /// All widgets in dashboard order
    fn list_widgets(&self) -> &[WidgetDefinition];

    fn find_widget(&self, id: &str) -> Option<&WidgetDefinition> {
        self.list_widgets().iter().find(|w| w.id == id)
    }
}

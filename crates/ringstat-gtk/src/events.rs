use ringstat::CategorySeries;

#[derive(Debug, Clone)]
pub enum AppEvent {
    SetData(CategorySeries),
}

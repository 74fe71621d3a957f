use common::model::Athlete;
use common::views::Listing;
use serde_json::Value;

#[derive(Clone)]
pub enum Msg {
    // Menu
    Home,
    AcercaDe,
    Listar(Listing),

    // Actions of the rendered views (`data-accion` links)
    Mostrar(String),
    Editar,
    EditarNombre,
    Cancelar,
    Guardar,

    // Results of the calls to the microservice
    HomeLoaded(Value),
    AboutLoaded(Value),
    ListLoaded(Listing, Vec<Athlete>),
    AthleteLoaded(Athlete),
}

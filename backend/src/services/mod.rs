pub mod plantilla;

// src/app/ui/mod.rs
// Declares the submodules within the UI part of the ideabench application.

/// Contains functions for drawing the main content panels (views) of the application.
pub mod views;

/// Contains functions for drawing separate windows (Add Idea, Upload Photo, Slideshow, Arrange Columns, Settings, About).
pub mod windows;

/// Contains functions for drawing reusable UI components (widgets): the command bar, the error banner, the filter row, and the log view.
pub mod widgets;

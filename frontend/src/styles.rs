pub const CONTAINER: &str = "container mx-auto px-4 py-8";
pub const CARD: &str = "bg-white dark:bg-gray-800 p-6 sm:p-8 rounded-2xl shadow-xl dark:shadow-[0_8px_30px_-12px_rgba(255,255,255,0.1)] max-w-2xl mx-auto border border-gray-100 dark:border-gray-700 backdrop-blur-sm";
pub const TITLE: &str = "text-3xl font-bold mb-6 text-center text-gray-900 dark:text-white";
pub const TITLE_GRADIENT: &str = "bg-clip-text text-transparent bg-gradient-to-r from-yellow-400 to-orange-500";
pub const TEXT_BODY: &str = "text-gray-600 dark:text-gray-300";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";

pub const BUTTON_SPIN: &str = "bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 text-white shadow-lg hover:shadow-xl transform hover:-translate-y-0.5 active:translate-y-0";
pub const BUTTON_STOP: &str = "bg-gradient-to-r from-red-400 to-red-500 hover:from-red-500 hover:to-red-600 text-white shadow-lg hover:shadow-xl transform hover:-translate-y-0.5";
pub const BUTTON_DISABLED: &str = "bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed text-white";
pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium text-white bg-gradient-to-r from-blue-600 to-blue-700 hover:from-blue-700 hover:to-blue-800 shadow-lg hover:shadow-xl transition-all duration-300";

pub const STAT_TILE: &str = "rounded-2xl p-4 shadow-md border border-white/40 dark:border-gray-700/40 backdrop-blur-sm text-center";
pub const STAT_TILE_SPINS: &str = "bg-gradient-to-br from-blue-50/90 to-blue-100/80 dark:from-blue-900/40 dark:to-blue-800/50";
pub const STAT_TILE_BALANCE: &str = "bg-gradient-to-br from-amber-50/90 to-amber-100/80 dark:from-amber-900/40 dark:to-amber-800/50";

pub const MODAL_BACKDROP: &str = "fixed inset-0 z-40 flex items-center justify-center bg-black/60 backdrop-blur-sm";
pub const MODAL_PANEL: &str = "relative bg-white dark:bg-gray-900 rounded-2xl shadow-2xl p-8 max-w-sm w-full mx-4 text-center border border-gray-200/50 dark:border-gray-700/50";

pub const TOAST_CONTAINER: &str = "fixed top-4 right-4 z-50 flex flex-col space-y-2 w-72";
pub const TOAST_BASE: &str = "animate-toast-in px-4 py-3 rounded-lg shadow-lg font-medium";
pub const TOAST_SUCCESS: &str = "bg-gradient-to-br from-green-400 to-green-600 text-white";
pub const TOAST_WARNING: &str = "bg-gradient-to-br from-yellow-300 to-yellow-400 text-gray-900";
pub const TOAST_INFO: &str = "bg-gradient-to-br from-teal-400 to-teal-600 text-white";

pub const ALERT_WARNING: &str = "flex flex-col items-center justify-center p-6 bg-gray-50 dark:bg-gray-800 rounded-lg shadow-sm border border-gray-200 dark:border-gray-700 max-w-md mx-auto";
